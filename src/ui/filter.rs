use nucleo::{Config, Matcher, Utf32Str};

use crate::model::PacketRecord;

/// Fuzzy filter over packet rows.
pub struct PacketFilter {
    matcher: Matcher,
    haystack_buf: Vec<char>,
    needle_buf: Vec<char>,
}

impl Default for PacketFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl PacketFilter {
    pub fn new() -> Self {
        Self {
            matcher: Matcher::new(Config::DEFAULT),
            haystack_buf: Vec::new(),
            needle_buf: Vec::new(),
        }
    }

    /// Indices of the rows matching `query`, in table order.
    pub fn matching_rows(&mut self, packets: &[PacketRecord], query: &str) -> Vec<usize> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return (0..packets.len()).collect();
        }

        let mut rows = Vec::new();
        for (idx, packet) in packets.iter().enumerate() {
            let haystack = packet.cells().join(" ").to_lowercase();
            let score = self.matcher.fuzzy_match(
                Utf32Str::new(&haystack, &mut self.haystack_buf),
                Utf32Str::new(&needle, &mut self.needle_buf),
            );
            if score.is_some() {
                rows.push(idx);
            }
        }
        rows
    }
}
