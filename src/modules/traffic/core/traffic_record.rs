// One visitor as seen by the traffic ledger.
//
// Invariants
// - At most one record per ip_address.
// - visit_count starts at 1 and only grows, by one per distinct request.
// - last_visit is epoch milliseconds of the latest sighting.

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TrafficRecord {
    pub id: String,
    pub ip_address: String,
    pub visit_count: i64,
    pub last_visit: i64,
}
