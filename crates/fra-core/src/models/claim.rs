use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use serde_json::{Map, Value};

/// Claim lifecycle statuses the performance metrics depend on.
///
/// Other statuses may appear in a dataset; they are carried through
/// filtering and rollups but count as neither pending nor decided.
pub mod status {
    pub const SUBMITTED: &str = "submitted";
    pub const UNDER_REVIEW: &str = "under_review";
    pub const FIELD_VERIFICATION: &str = "field_verification";
    pub const APPROVED: &str = "approved";
    pub const REJECTED: &str = "rejected";

    /// Statuses counted as pending a decision
    pub const PENDING: [&str; 3] = [SUBMITTED, UNDER_REVIEW, FIELD_VERIFICATION];
}

/// The filterable string attributes of a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimField {
    State,
    District,
    Village,
    FraType,
    Status,
    TribalCommunity,
}

impl ClaimField {
    pub const ALL: [ClaimField; 6] = [
        ClaimField::State,
        ClaimField::District,
        ClaimField::Village,
        ClaimField::FraType,
        ClaimField::Status,
        ClaimField::TribalCommunity,
    ];

    /// Attribute key as it appears in feature properties and filter criteria
    pub fn key(&self) -> &'static str {
        match self {
            ClaimField::State => "state",
            ClaimField::District => "district",
            ClaimField::Village => "village",
            ClaimField::FraType => "fra_type",
            ClaimField::Status => "status",
            ClaimField::TribalCommunity => "tribal_community",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

/// A single Forest Rights Act claim
#[derive(Debug, Clone)]
pub struct ClaimRecord {
    /// Unique claim identifier
    pub claim_id: String,

    pub state: Option<String>,
    pub district: Option<String>,
    pub village: Option<String>,

    /// Rights category (IFR, CFR, CR)
    pub fra_type: Option<String>,

    /// Lifecycle status, see [`status`]
    pub status: Option<String>,

    pub tribal_community: Option<String>,

    /// Claimed area in hectares; `None` when absent or not numeric
    pub claim_area_ha: Option<f64>,

    /// `None` when absent or unparseable
    pub submission_date: Option<NaiveDate>,

    pub field_verification_done: bool,
    pub gps_coordinates_verified: bool,

    /// Remaining feature properties, kept verbatim
    pub attributes: Map<String, Value>,

    /// Original GeoJSON geometry text, never interpreted
    pub geometry: Option<Box<RawValue>>,
}

impl ClaimRecord {
    /// Build a record from a feature's property map and raw geometry.
    ///
    /// Malformed values never fail the conversion: they degrade to `None`
    /// (or `false` for the verification flags).
    pub fn from_properties(mut properties: Map<String, Value>, geometry: Option<Box<RawValue>>) -> Self {
        let mut take = |key: &str| properties.remove(key).unwrap_or(Value::Null);

        let claim_id = text_value(&take("claim_id")).unwrap_or_default();
        let state = text_value(&take("state"));
        let district = text_value(&take("district"));
        let village = text_value(&take("village"));
        let fra_type = text_value(&take("fra_type"));
        let status = text_value(&take("status"));
        let tribal_community = text_value(&take("tribal_community"));
        let claim_area_ha = area_value(&take("claim_area_ha"));
        let submission_date = date_value(&take("submission_date"));
        let field_verification_done = flag_value(&take("field_verification_done"));
        let gps_coordinates_verified = flag_value(&take("gps_coordinates_verified"));

        Self {
            claim_id,
            state,
            district,
            village,
            fra_type,
            status,
            tribal_community,
            claim_area_ha,
            submission_date,
            field_verification_done,
            gps_coordinates_verified,
            attributes: properties,
            geometry,
        }
    }

    /// Value of one of the filterable string attributes
    pub fn field(&self, field: ClaimField) -> Option<&str> {
        let value = match field {
            ClaimField::State => &self.state,
            ClaimField::District => &self.district,
            ClaimField::Village => &self.village,
            ClaimField::FraType => &self.fra_type,
            ClaimField::Status => &self.status,
            ClaimField::TribalCommunity => &self.tribal_community,
        };
        value.as_deref()
    }

    pub fn has_status(&self, wanted: &str) -> bool {
        self.status.as_deref() == Some(wanted)
    }

    pub fn is_approved(&self) -> bool {
        self.has_status(status::APPROVED)
    }

    pub fn is_rejected(&self) -> bool {
        self.has_status(status::REJECTED)
    }

    pub fn is_pending(&self) -> bool {
        self.status.as_deref().is_some_and(|s| status::PENDING.contains(&s))
    }

    pub fn geometry(&self) -> Option<&RawValue> {
        self.geometry.as_deref()
    }

    /// GeoJSON geometry type name, read from the raw geometry
    pub fn geometry_type(&self) -> Option<String> {
        let raw = self.geometry.as_ref()?;
        let value: Value = serde_json::from_str(raw.get()).ok()?;
        value.get("type").and_then(Value::as_str).map(str::to_string)
    }

    /// Flatten the record back into a property map.
    ///
    /// Every typed attribute is emitted, absent values as explicit `null`.
    pub fn properties(&self) -> Map<String, Value> {
        let mut properties = self.attributes.clone();

        let text = |value: &Option<String>| value.clone().map_or(Value::Null, Value::String);

        properties.insert("claim_id".to_string(), Value::String(self.claim_id.clone()));
        properties.insert("state".to_string(), text(&self.state));
        properties.insert("district".to_string(), text(&self.district));
        properties.insert("village".to_string(), text(&self.village));
        properties.insert("fra_type".to_string(), text(&self.fra_type));
        properties.insert("status".to_string(), text(&self.status));
        properties.insert("tribal_community".to_string(), text(&self.tribal_community));
        properties.insert(
            "claim_area_ha".to_string(),
            self.claim_area_ha
                .and_then(serde_json::Number::from_f64)
                .map_or(Value::Null, Value::Number),
        );
        properties.insert(
            "submission_date".to_string(),
            self.submission_date
                .map_or(Value::Null, |d| Value::String(d.format("%Y-%m-%d").to_string())),
        );
        properties.insert(
            "field_verification_done".to_string(),
            Value::Bool(self.field_verification_done),
        );
        properties.insert(
            "gps_coordinates_verified".to_string(),
            Value::Bool(self.gps_coordinates_verified),
        );

        properties
    }

    /// Flattened attributes plus the untouched geometry
    pub fn details(&self) -> ClaimDetails {
        let mut properties = self.properties();
        properties.remove("geometry");

        ClaimDetails { properties, geometry: self.geometry.clone() }
    }
}

/// A single claim as returned by lookup: attributes with `geometry` alongside
#[derive(Debug, Clone, Serialize)]
pub struct ClaimDetails {
    #[serde(flatten)]
    pub properties: Map<String, Value>,
    pub geometry: Option<Box<RawValue>>,
}

/// Non-empty string attribute; numbers are stringified
fn text_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Finite area from a number or numeric string
fn area_value(value: &Value) -> Option<f64> {
    let area = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    area.filter(|a| a.is_finite())
}

fn date_value(value: &Value) -> Option<NaiveDate> {
    let raw = value.as_str()?.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(datetime.date());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(datetime.date());
    }
    DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive())
}

fn flag_value(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_i64() == Some(1),
        Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_typed_fields_are_lifted() {
        let record = ClaimRecord::from_properties(
            props(json!({
                "claim_id": "FRA-001",
                "state": "Odisha",
                "district": "Koraput",
                "village": "Semiliguda",
                "fra_type": "IFR",
                "status": "approved",
                "tribal_community": "Kondh",
                "claim_area_ha": 2.5,
                "submission_date": "2023-04-12",
                "field_verification_done": true,
                "gps_coordinates_verified": false,
                "patta_number": "P-77"
            })),
            None,
        );

        assert_eq!(record.claim_id, "FRA-001");
        assert_eq!(record.field(ClaimField::State), Some("Odisha"));
        assert_eq!(record.field(ClaimField::FraType), Some("IFR"));
        assert_eq!(record.claim_area_ha, Some(2.5));
        assert_eq!(record.submission_date, NaiveDate::from_ymd_opt(2023, 4, 12));
        assert!(record.field_verification_done);
        assert!(!record.gps_coordinates_verified);
        assert!(record.is_approved());
        assert_eq!(record.attributes.len(), 1);
        assert_eq!(record.attributes["patta_number"], json!("P-77"));
    }

    #[test]
    fn test_malformed_values_degrade_to_none() {
        let record = ClaimRecord::from_properties(
            props(json!({
                "claim_id": "FRA-002",
                "tribal_community": "   ",
                "claim_area_ha": "not a number",
                "submission_date": "sometime in May",
                "field_verification_done": "maybe"
            })),
            None,
        );

        assert_eq!(record.tribal_community, None);
        assert_eq!(record.claim_area_ha, None);
        assert_eq!(record.submission_date, None);
        assert!(!record.field_verification_done);
    }

    #[test]
    fn test_lenient_encodings() {
        let record = ClaimRecord::from_properties(
            props(json!({
                "claim_id": 42,
                "claim_area_ha": " 3.75 ",
                "submission_date": "2024-01-05T10:30:00",
                "field_verification_done": "TRUE",
                "gps_coordinates_verified": 1
            })),
            None,
        );

        assert_eq!(record.claim_id, "42");
        assert_eq!(record.claim_area_ha, Some(3.75));
        assert_eq!(record.submission_date, NaiveDate::from_ymd_opt(2024, 1, 5));
        assert!(record.field_verification_done);
        assert!(record.gps_coordinates_verified);
    }

    #[test]
    fn test_rfc3339_date() {
        assert_eq!(
            date_value(&json!("2022-11-30T23:15:00+05:30")),
            NaiveDate::from_ymd_opt(2022, 11, 30)
        );
    }

    #[test]
    fn test_properties_emit_explicit_nulls() {
        let record = ClaimRecord::from_properties(props(json!({ "claim_id": "FRA-003" })), None);
        let properties = record.properties();

        assert_eq!(properties["claim_area_ha"], Value::Null);
        assert_eq!(properties["submission_date"], Value::Null);
        assert_eq!(properties["state"], Value::Null);
        assert_eq!(properties["field_verification_done"], json!(false));
    }

    #[test]
    fn test_pending_statuses() {
        for s in status::PENDING {
            let record =
                ClaimRecord::from_properties(props(json!({ "claim_id": "x", "status": s })), None);
            assert!(record.is_pending(), "{s} should be pending");
        }

        let rejected = ClaimRecord::from_properties(
            props(json!({ "claim_id": "x", "status": "rejected" })),
            None,
        );
        assert!(!rejected.is_pending());
        assert!(rejected.is_rejected());
    }

    #[test]
    fn test_geometry_type_and_details() {
        let geometry = RawValue::from_string(r#"{"type":"Point","coordinates":[82.1,19.3]}"#.into())
            .unwrap();
        let record =
            ClaimRecord::from_properties(props(json!({ "claim_id": "FRA-004" })), Some(geometry));

        assert_eq!(record.geometry_type().as_deref(), Some("Point"));

        let details = serde_json::to_value(record.details()).unwrap();
        assert_eq!(details["geometry"]["type"], json!("Point"));
        assert_eq!(details["claim_id"], json!("FRA-004"));
    }

    #[test]
    fn test_field_keys_round_trip() {
        for field in ClaimField::ALL {
            assert_eq!(ClaimField::from_key(field.key()), Some(field));
        }
        assert_eq!(ClaimField::from_key("claim_area_min"), None);
    }
}
