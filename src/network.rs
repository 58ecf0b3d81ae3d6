//! Where dashboard data comes from.
//!
//! Only the mock source exists for now; a live source would implement
//! [`TelemetrySource`] and be handed to the app in its place.

use crate::model::{PacketRecord, ProtocolShare, Snapshot, SummaryCounters, TrafficPoint};

/// Supplies a full snapshot of network telemetry.
pub trait TelemetrySource {
    fn name(&self) -> &str;

    fn snapshot(&self) -> Snapshot;
}

/// Fixed sample data used until a real capture backend exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockSource;

impl TelemetrySource for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            counters: SummaryCounters {
                packets_captured: 15234,
                active_connections: 45,
                error_count: 3,
                alert_count: 5,
            },
            traffic: vec![
                TrafficPoint::new("10:00", 200),
                TrafficPoint::new("10:05", 400),
                TrafficPoint::new("10:10", 350),
                TrafficPoint::new("10:15", 500),
                TrafficPoint::new("10:20", 700),
            ],
            protocols: vec![
                ProtocolShare::new("TCP", 60.0),
                ProtocolShare::new("UDP", 25.0),
                ProtocolShare::new("ICMP", 10.0),
                ProtocolShare::new("Other", 5.0),
            ],
            packets: vec![
                PacketRecord::new("192.168.1.10", "10.0.0.5", "TCP", "512B", "10:20:15"),
                PacketRecord::new("192.168.1.12", "10.0.0.8", "UDP", "256B", "10:20:20"),
                PacketRecord::new("192.168.1.14", "10.0.0.9", "ICMP", "128B", "10:20:25"),
                PacketRecord::new("192.168.1.15", "10.0.0.11", "TCP", "1KB", "10:20:30"),
            ],
        }
    }
}

/// One-time initialization: pull the snapshot the dashboard will show.
pub fn load_snapshot(source: &dyn TelemetrySource) -> Snapshot {
    let snapshot = source.snapshot();
    log::debug!(
        "Loaded snapshot from '{}' source: {} points, {} protocols, {} packets",
        source.name(),
        snapshot.traffic.len(),
        snapshot.protocols.len(),
        snapshot.packets.len()
    );
    snapshot
}
