use crate::modules::traffic::core::traffic_record::TrafficRecord;
use serde::Deserialize;
use std::cmp::Ordering;

/// Sort key for traffic listings. Ties are broken by ip ascending, compared bytewise
/// (`COLLATE "C"` in SQL) so both stores list ties identically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrafficOrder {
    #[default]
    VisitCount,
    LastVisit,
}

impl TrafficOrder {
    pub fn compare(self, left: &TrafficRecord, right: &TrafficRecord) -> Ordering {
        let primary = match self {
            TrafficOrder::VisitCount => right.visit_count.cmp(&left.visit_count),
            TrafficOrder::LastVisit => right.last_visit.cmp(&left.last_visit),
        };
        primary.then_with(|| left.ip_address.cmp(&right.ip_address))
    }

    pub fn sort(self, records: &mut [TrafficRecord]) {
        records.sort_by(|left, right| self.compare(left, right));
    }

    pub fn sql_order_by(self) -> &'static str {
        match self {
            TrafficOrder::VisitCount => r#"visit_count DESC, ip_address COLLATE "C" ASC"#,
            TrafficOrder::LastVisit => r#"last_visit DESC, ip_address COLLATE "C" ASC"#,
        }
    }
}

#[cfg(test)]
mod traffic_order_tests {
    use super::*;
    use rstest::rstest;

    fn record(ip: &str, visit_count: i64, last_visit: i64) -> TrafficRecord {
        TrafficRecord {
            id: format!("id-{ip}"),
            ip_address: ip.into(),
            visit_count,
            last_visit,
        }
    }

    fn ips(records: &[TrafficRecord]) -> Vec<&str> {
        records.iter().map(|r| r.ip_address.as_str()).collect()
    }

    #[rstest]
    #[case::by_visit_count(TrafficOrder::VisitCount, vec!["10.0.0.2", "10.0.0.1", "10.0.0.3"])]
    #[case::by_last_visit(TrafficOrder::LastVisit, vec!["10.0.0.3", "10.0.0.1", "10.0.0.2"])]
    fn it_should_sort_descending_by_the_chosen_key(
        #[case] order: TrafficOrder,
        #[case] expected: Vec<&str>,
    ) {
        let mut records = vec![
            record("10.0.0.1", 2, 200),
            record("10.0.0.2", 5, 100),
            record("10.0.0.3", 1, 300),
        ];
        order.sort(&mut records);
        assert_eq!(ips(&records), expected);
    }

    #[rstest]
    fn it_should_break_ties_by_ip_ascending() {
        let mut records = vec![
            record("10.0.0.9", 3, 100),
            record("10.0.0.1", 3, 100),
            record("10.0.0.5", 3, 100),
        ];
        TrafficOrder::VisitCount.sort(&mut records);
        assert_eq!(ips(&records), vec!["10.0.0.1", "10.0.0.5", "10.0.0.9"]);
    }

    // Bytewise order puts upper case before lower case, unlike most locale collations.
    #[rstest]
    fn it_should_break_ties_bytewise() {
        let mut records = vec![
            record("fd00::b", 1, 100),
            record("FD00::A", 1, 100),
            record("10.0.0.1", 1, 100),
        ];
        TrafficOrder::LastVisit.sort(&mut records);
        assert_eq!(ips(&records), vec!["10.0.0.1", "FD00::A", "fd00::b"]);
    }

    #[rstest]
    fn it_should_deserialize_from_snake_case() {
        let order: TrafficOrder = serde_json::from_str("\"last_visit\"").unwrap();
        assert_eq!(order, TrafficOrder::LastVisit);
    }
}
