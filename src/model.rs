use serde::Serialize;

/// The four headline metrics shown as cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SummaryCounters {
    pub packets_captured: u64,
    pub active_connections: u64,
    pub error_count: u64,
    pub alert_count: u64,
}

/// One sample of traffic volume at a labeled time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrafficPoint {
    pub time_label: String,
    pub count: u64,
}

impl TrafficPoint {
    pub fn new(time_label: &str, count: u64) -> Self {
        Self {
            time_label: time_label.to_string(),
            count,
        }
    }
}

/// Relative share of traffic attributed to a protocol. Not normalized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProtocolShare {
    pub protocol_name: String,
    pub value: f64,
}

impl ProtocolShare {
    pub fn new(protocol_name: &str, value: f64) -> Self {
        Self {
            protocol_name: protocol_name.to_string(),
            value,
        }
    }

    /// Whether this share takes up any area in the chart.
    pub fn has_area(&self) -> bool {
        self.value.is_finite() && self.value > 0.0
    }

    /// Sum of the shares that have area. Non-finite and non-positive
    /// values count as zero.
    pub fn total(shares: &[ProtocolShare]) -> f64 {
        shares
            .iter()
            .filter(|s| s.has_area())
            .map(|s| s.value)
            .sum()
    }

    /// Fraction of `total` this share represents, 0.0 when it has no area.
    pub fn fraction_of(&self, total: f64) -> f64 {
        if !total.is_finite() || total <= 0.0 || !self.has_area() {
            0.0
        } else {
            self.value / total
        }
    }
}

/// A display-only packet row. Size and timestamp come pre-formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PacketRecord {
    pub source_address: String,
    pub dest_address: String,
    pub protocol: String,
    pub size_label: String,
    pub timestamp: String,
}

impl PacketRecord {
    pub fn new(src: &str, dst: &str, protocol: &str, size: &str, timestamp: &str) -> Self {
        Self {
            source_address: src.to_string(),
            dest_address: dst.to_string(),
            protocol: protocol.to_string(),
            size_label: size.to_string(),
            timestamp: timestamp.to_string(),
        }
    }

    /// Cells in table column order.
    pub fn cells(&self) -> [&str; 5] {
        [
            &self.source_address,
            &self.dest_address,
            &self.protocol,
            &self.size_label,
            &self.timestamp,
        ]
    }

    /// Single-line form, e.g. `192.168.1.10 ➔ 10.0.0.5 [TCP] 512B @ 10:20:15`.
    pub fn summary(&self) -> String {
        format!(
            "{} ➔ {} [{}] {} @ {}",
            self.source_address, self.dest_address, self.protocol, self.size_label, self.timestamp
        )
    }
}

/// Everything the dashboard displays, produced once by a telemetry source.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Snapshot {
    pub counters: SummaryCounters,
    pub traffic: Vec<TrafficPoint>,
    pub protocols: Vec<ProtocolShare>,
    pub packets: Vec<PacketRecord>,
}

impl Snapshot {
    pub fn total_share(&self) -> f64 {
        ProtocolShare::total(&self.protocols)
    }

    pub fn peak_count(&self) -> u64 {
        self.traffic.iter().map(|p| p.count).max().unwrap_or(0)
    }
}
