//! Decode-service payload and its label/value projection.

use serde::{Deserialize, Serialize};

/// Top-level response of the decode service.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct DecodeResponse {
    #[serde(rename = "Results", default)]
    pub results: Vec<VehicleRecord>,
}

/// The subset of the decoded vehicle record the tool displays.
///
/// The service reports unknown fields as empty strings or `null`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct VehicleRecord {
    #[serde(rename = "Make", default)]
    pub make: Option<String>,
    #[serde(rename = "Model", default)]
    pub model: Option<String>,
    #[serde(rename = "ModelYear", default)]
    pub model_year: Option<String>,
    #[serde(rename = "Trim", default)]
    pub trim: Option<String>,
    #[serde(rename = "BodyClass", default)]
    pub body_class: Option<String>,
    #[serde(rename = "VehicleType", default)]
    pub vehicle_type: Option<String>,
    #[serde(rename = "DisplacementL", default)]
    pub displacement_l: Option<String>,
    #[serde(rename = "EngineCylinders", default)]
    pub engine_cylinders: Option<String>,
    #[serde(rename = "FuelTypePrimary", default)]
    pub fuel_type: Option<String>,
    #[serde(rename = "PlantCity", default)]
    pub plant_city: Option<String>,
    #[serde(rename = "PlantState", default)]
    pub plant_state: Option<String>,
    #[serde(rename = "PlantCountry", default)]
    pub plant_country: Option<String>,
}

/// One labelled line of decoded output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DecodedField {
    pub label: &'static str,
    pub value: String,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl VehicleRecord {
    /// Engine descriptor such as `2.4L 4-cyl`, from whichever halves exist.
    pub fn engine(&self) -> Option<String> {
        let displacement = present(&self.displacement_l).map(|d| {
            // The service reports litres with long float tails ("2.354000")
            let litres = d
                .parse::<f64>()
                .map(|l| format!("{:.1}", l))
                .unwrap_or_else(|_| d.to_string());
            format!("{}L", litres)
        });
        let cylinders = present(&self.engine_cylinders).map(|c| format!("{}-cyl", c));

        match (displacement, cylinders) {
            (Some(d), Some(c)) => Some(format!("{} {}", d, c)),
            (Some(d), None) => Some(d),
            (None, Some(c)) => Some(c),
            (None, None) => None,
        }
    }

    /// Plant location as `City, State, Country`, skipping blank parts.
    pub fn plant(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.plant_city, &self.plant_state, &self.plant_country]
            .into_iter()
            .filter_map(present)
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }

    /// Project into ordered label/value pairs, leaving out absent or blank
    /// values.
    pub fn fields(&self) -> Vec<DecodedField> {
        let candidates: [(&'static str, Option<String>); 9] = [
            ("Make", present(&self.make).map(str::to_string)),
            ("Model", present(&self.model).map(str::to_string)),
            ("Year", present(&self.model_year).map(str::to_string)),
            ("Trim", present(&self.trim).map(str::to_string)),
            ("Body Class", present(&self.body_class).map(str::to_string)),
            ("Vehicle Type", present(&self.vehicle_type).map(str::to_string)),
            ("Engine", self.engine()),
            ("Fuel Type", present(&self.fuel_type).map(str::to_string)),
            ("Plant", self.plant()),
        ];

        candidates
            .into_iter()
            .filter_map(|(label, value)| value.map(|value| DecodedField { label, value }))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCORD: &str = r#"{
        "Count": 1,
        "Message": "Results returned successfully",
        "Results": [{
            "Make": "HONDA",
            "Model": "Accord",
            "ModelYear": "2003",
            "Trim": "EX-V6",
            "BodyClass": "Coupe",
            "VehicleType": "PASSENGER CAR",
            "DisplacementL": "2.998832",
            "EngineCylinders": "6",
            "FuelTypePrimary": "Gasoline",
            "PlantCity": "MARYSVILLE",
            "PlantState": "OHIO",
            "PlantCountry": "UNITED STATES (USA)",
            "ErrorCode": "0"
        }]
    }"#;

    #[test]
    fn test_full_record() {
        let response: DecodeResponse = serde_json::from_str(ACCORD).unwrap();
        let fields = response.results[0].fields();
        let pairs: Vec<(&str, &str)> = fields.iter().map(|f| (f.label, f.value.as_str())).collect();

        assert_eq!(
            pairs,
            vec![
                ("Make", "HONDA"),
                ("Model", "Accord"),
                ("Year", "2003"),
                ("Trim", "EX-V6"),
                ("Body Class", "Coupe"),
                ("Vehicle Type", "PASSENGER CAR"),
                ("Engine", "3.0L 6-cyl"),
                ("Fuel Type", "Gasoline"),
                ("Plant", "MARYSVILLE, OHIO, UNITED STATES (USA)"),
            ]
        );
    }

    #[test]
    fn test_blank_and_missing_fields_filtered() {
        let response: DecodeResponse = serde_json::from_str(
            r#"{"Results": [{"Make": "FORD", "Model": "  ", "Trim": null, "PlantCountry": "MEXICO"}]}"#,
        )
        .unwrap();
        let labels: Vec<&str> = response.results[0].fields().iter().map(|f| f.label).collect();
        assert_eq!(labels, ["Make", "Plant"]);
    }

    #[test]
    fn test_engine_halves() {
        let record = VehicleRecord {
            engine_cylinders: Some("4".to_string()),
            ..Default::default()
        };
        assert_eq!(record.engine().as_deref(), Some("4-cyl"));

        let record = VehicleRecord {
            displacement_l: Some("1.5".to_string()),
            ..Default::default()
        };
        assert_eq!(record.engine().as_deref(), Some("1.5L"));
        assert_eq!(VehicleRecord::default().engine(), None);
    }
}
