//! Field state of each calculator form.
//!
//! Values are kept exactly as the user typed them. Building a request never
//! fails and never blocks on empty fields; the backend decides what is valid.

use crate::api::{
    DilutionRequest, DnaConcentrationRequest, PcrRequest, UlToMmolRequest, V1_UNIT,
};
use crate::rows::ComponentRows;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PcrForm {
    pub reactions: String,
    pub volume: String,
    pub rows: ComponentRows,
}

impl Default for PcrForm {
    fn default() -> Self {
        Self {
            reactions: String::new(),
            volume: String::new(),
            rows: ComponentRows::with_defaults(),
        }
    }
}

impl PcrForm {
    pub fn request(&self) -> PcrRequest {
        PcrRequest {
            reactions: self.reactions.clone(),
            volume: self.volume.clone(),
            components: self.rows.components(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DilutionForm {
    pub c1: String,
    pub c2: String,
    pub v2: String,
}

impl DilutionForm {
    pub fn request(&self) -> DilutionRequest {
        DilutionRequest {
            c1: self.c1.clone(),
            c2: self.c2.clone(),
            v2: self.v2.clone(),
            v1_unit: V1_UNIT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DnaConcentrationForm {
    pub concentration: String,
    pub length: String,
}

impl DnaConcentrationForm {
    pub fn request(&self) -> DnaConcentrationRequest {
        DnaConcentrationRequest {
            concentration: self.concentration.clone(),
            length: self.length.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UlToMmolForm {
    pub volume: String,
    pub molarity: String,
}

impl UlToMmolForm {
    pub fn request(&self) -> UlToMmolRequest {
        UlToMmolRequest {
            volume: self.volume.clone(),
            molarity: self.molarity.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rows::RowField;
    use serde_json::json;

    #[test]
    fn test_pcr_default_scenario() {
        let form = PcrForm {
            reactions: "10".into(),
            volume: "50".into(),
            ..PcrForm::default()
        };
        let body = serde_json::to_value(form.request()).unwrap();
        assert_eq!(
            body,
            json!({
                "reactions": "10",
                "volume": "50",
                "components": [
                    {"name": "Polymerase", "stock": "5", "final": "0.02"},
                    {"name": "Buffer", "stock": "10", "final": "1"},
                    {"name": "dNTPs", "stock": "10", "final": "0.2"},
                    {"name": "Primer F", "stock": "10", "final": "0.5"},
                    {"name": "Primer R", "stock": "10", "final": "0.5"},
                    {"name": "Template DNA", "stock": "50", "final": "2"}
                ]
            })
        );
    }

    #[test]
    fn test_pcr_partial_row_dropped() {
        let mut form = PcrForm::default();
        let id = form.rows.add_blank();
        form.rows.update(id, RowField::Name, "MgCl2".into());
        assert_eq!(form.rows.len(), 7);
        assert_eq!(form.request().components.len(), 6);

        form.rows.update(id, RowField::Stock, "25".into());
        form.rows.update(id, RowField::Final, "1.5".into());
        let components = form.request().components;
        assert_eq!(components.len(), 7);
        assert_eq!(components[6].name, "MgCl2");
    }

    #[test]
    fn test_dilution_scenario() {
        let form = DilutionForm {
            c1: "10".into(),
            c2: "1".into(),
            v2: "100".into(),
        };
        assert_eq!(
            serde_json::to_value(form.request()).unwrap(),
            json!({"c1": "10", "c2": "1", "v2": "100", "v1_unit": "µL"})
        );
    }

    #[test]
    fn test_empty_fields_still_build_request() {
        assert_eq!(
            serde_json::to_value(DnaConcentrationForm::default().request()).unwrap(),
            json!({"concentration": "", "length": ""})
        );
        assert_eq!(
            serde_json::to_value(UlToMmolForm::default().request()).unwrap(),
            json!({"volume": "", "molarity": ""})
        );
        let pcr = PcrForm::default().request();
        assert_eq!(pcr.reactions, "");
        assert_eq!(pcr.volume, "");
    }

    #[test]
    fn test_ul_to_mmol_request() {
        let form = UlToMmolForm {
            volume: "250".into(),
            molarity: "0.5".into(),
        };
        assert_eq!(
            serde_json::to_value(form.request()).unwrap(),
            json!({"volume": "250", "molarity": "0.5"})
        );
    }
}
