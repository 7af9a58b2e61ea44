//! What a calculator's result container shows.
//!
//! A container starts [`ResultView::Hidden`]. Each settled submission
//! replaces the whole view, so a success after an error drops the error and
//! vice versa.

use crate::api::{Calculation, Outcome, PcrLine};
use crate::error::Result;

/// Column headings of the master mix table.
pub const MASTER_MIX_HEADERS: [&str; 3] = ["Component", "Per Rxn (µL)", "Master Mix (µL)"];

/// Volumes computed for a PCR master mix.
#[derive(Debug, Clone, PartialEq)]
pub struct MasterMixTable {
    pub total_mm_volume: f64,
    pub rows: Vec<PcrLine>,
}

impl MasterMixTable {
    pub fn total_line(&self) -> String {
        format!("Total Master Mix Volume: {} µL", self.total_mm_volume)
    }
}

/// The main result, without its explanation.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultBody {
    Text(String),
    MasterMix(MasterMixTable),
}

impl ResultBody {
    /// Text placed on the clipboard by the Copy control.
    ///
    /// Tables flatten to one line per row with tab-separated cells, which
    /// pastes cleanly into a spreadsheet.
    pub fn plain_text(&self) -> String {
        match self {
            ResultBody::Text(text) => text.clone(),
            ResultBody::MasterMix(table) => {
                let mut lines = Vec::with_capacity(table.rows.len() + 2);
                lines.push(table.total_line());
                lines.push(MASTER_MIX_HEADERS.join("\t"));
                for row in &table.rows {
                    lines.push(format!(
                        "{}\t{}\t{}",
                        row.name, row.single_rxn_vol, row.master_mix_vol
                    ));
                }
                lines.join("\n")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultView {
    #[default]
    Hidden,
    Success {
        body: ResultBody,
        explanation: String,
    },
    Error {
        message: String,
    },
}

impl ResultView {
    pub fn is_visible(&self) -> bool {
        !matches!(self, ResultView::Hidden)
    }

    pub fn copy_text(&self) -> Option<String> {
        match self {
            ResultView::Success { body, .. } => Some(body.plain_text()),
            _ => None,
        }
    }
}

/// Map a finished API call for calculation `C` to the view that replaces
/// the container's content.
pub fn settle<C: Calculation>(result: Result<Outcome<C::Output>>) -> ResultView {
    match result {
        Ok(Outcome::Success(output)) => C::present(output),
        Ok(Outcome::Failure { error }) => ResultView::Error { message: error },
        Err(e) => ResultView::Error {
            message: e.to_string(),
        },
    }
}

/// Label state of the Copy control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyFeedback {
    #[default]
    Idle,
    Copied,
}

impl CopyFeedback {
    pub fn label(self) -> &'static str {
        match self {
            CopyFeedback::Idle => "Copy",
            CopyFeedback::Copied => "Copied!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{DilutionRequest, PcrOutput, PcrRequest, TextOutput};
    use crate::error::ApiError;

    impl ResultView {
        fn explanation(&self) -> Option<&str> {
            match self {
                ResultView::Success { explanation, .. } => Some(explanation),
                _ => None,
            }
        }

        fn error_message(&self) -> Option<&str> {
            match self {
                ResultView::Error { message } => Some(message),
                _ => None,
            }
        }
    }

    fn master_mix() -> ResultBody {
        ResultBody::MasterMix(MasterMixTable {
            total_mm_volume: 550.0,
            rows: vec![
                PcrLine {
                    name: "Buffer".into(),
                    single_rxn_vol: 5.0,
                    master_mix_vol: 55.0,
                },
                PcrLine {
                    name: "Primer F".into(),
                    single_rxn_vol: 2.5,
                    master_mix_vol: 27.5,
                },
            ],
        })
    }

    #[test]
    fn test_hidden_by_default() {
        let view = ResultView::default();
        assert!(!view.is_visible());
        assert_eq!(view.copy_text(), None);
    }

    #[test]
    fn test_text_plain_text_is_verbatim() {
        let body = ResultBody::Text("0.0154 pmol/µL".into());
        assert_eq!(body.plain_text(), "0.0154 pmol/µL");
    }

    #[test]
    fn test_table_plain_text() {
        assert_eq!(
            master_mix().plain_text(),
            "Total Master Mix Volume: 550 µL\n\
             Component\tPer Rxn (µL)\tMaster Mix (µL)\n\
             Buffer\t5\t55\n\
             Primer F\t2.5\t27.5"
        );
    }

    #[test]
    fn test_copy_text_excludes_explanation() {
        let view = ResultView::Success {
            body: ResultBody::Text("10.00 µL".into()),
            explanation: "Using the formula C1V1 = C2V2".into(),
        };
        assert!(view.is_visible());
        assert_eq!(view.copy_text().as_deref(), Some("10.00 µL"));
        assert_eq!(view.explanation(), Some("Using the formula C1V1 = C2V2"));
    }

    #[test]
    fn test_settle_failure_has_no_explanation() {
        let view = settle::<DilutionRequest>(Ok(Outcome::Failure {
            error: "c2 must be less than c1".into(),
        }));
        assert!(view.is_visible());
        assert_eq!(view.error_message(), Some("c2 must be less than c1"));
        assert_eq!(view.explanation(), None);
        assert_eq!(view.copy_text(), None);
    }

    #[test]
    fn test_settle_transport_error() {
        let view = settle::<DilutionRequest>(Err(ApiError::Transport("offline".into())));
        assert_eq!(view.error_message(), Some("Network request failed: offline"));
    }

    #[test]
    fn test_settle_replaces_previous_view() {
        let mut view = settle::<DilutionRequest>(Err(ApiError::Unknown));
        assert!(view.error_message().is_some());

        view = settle::<DilutionRequest>(Ok(Outcome::Success(TextOutput {
            result: "10.00 µL".into(),
            explanation: "ok".into(),
        })));
        assert_eq!(view.error_message(), None);
        assert_eq!(view.copy_text().as_deref(), Some("10.00 µL"));
    }

    #[test]
    fn test_settle_pcr_builds_table() {
        let view = settle::<PcrRequest>(Ok(Outcome::Success(PcrOutput {
            total_mm_volume: 550.0,
            results: vec![],
            explanation: "margin".into(),
        })));
        match view {
            ResultView::Success {
                body: ResultBody::MasterMix(table),
                ..
            } => assert_eq!(table.total_line(), "Total Master Mix Volume: 550 µL"),
            other => panic!("Expected master mix, got {:?}", other),
        }
    }

    #[test]
    fn test_copy_feedback_labels() {
        assert_eq!(CopyFeedback::default().label(), "Copy");
        assert_eq!(CopyFeedback::Copied.label(), "Copied!");
    }
}
