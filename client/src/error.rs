use serde::Deserialize;
use thiserror::Error;

/// Result codes Horizon attaches to a rejected transaction.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ResultCodes {
    pub transaction: Option<String>,
    pub inner_transaction: Option<String>,
    #[serde(default)]
    pub operations: Vec<String>,
}

impl std::fmt::Display for ResultCodes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.transaction.as_deref().unwrap_or("unknown"))?;
        if let Some(inner) = &self.inner_transaction {
            write!(f, " (inner: {})", inner)?;
        }
        if !self.operations.is_empty() {
            write!(f, " [{}]", self.operations.join(", "))?;
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum HorizonError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("account {0} not found")]
    AccountNotFound(String),

    #[error("invalid sequence number '{0}'")]
    InvalidSequence(String),

    #[error("{title}: {result_codes}")]
    Rejected { title: String, result_codes: ResultCodes },

    #[error("horizon returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("friendbot could not fund {account} ({status}): {body}")]
    Friendbot { account: String, status: u16, body: String },

    #[error("no friendbot configured for this network")]
    NoFriendbot,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Problem {
    pub title: String,
    pub extras: Option<ProblemExtras>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProblemExtras {
    pub result_codes: Option<ResultCodes>,
}

impl HorizonError {
    /// Builds the error for a non-success reply, keeping the structured
    /// result codes when the body is a transaction failure problem.
    pub(crate) fn from_reply(status: u16, body: String) -> Self {
        match serde_json::from_str::<Problem>(&body) {
            Ok(Problem { title, extras: Some(ProblemExtras { result_codes: Some(result_codes) }) }) => {
                HorizonError::Rejected { title, result_codes }
            }
            _ => HorizonError::Status { status, body },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_keeps_result_codes() {
        let body = r#"{
            "type": "https://stellar.org/horizon-errors/transaction_failed",
            "title": "Transaction Failed",
            "status": 400,
            "extras": {
                "envelope_xdr": "AAAA",
                "result_codes": {
                    "transaction": "tx_fee_bump_inner_failed",
                    "inner_transaction": "tx_failed",
                    "operations": ["op_too_few_offers"]
                }
            }
        }"#;

        match HorizonError::from_reply(400, body.to_string()) {
            HorizonError::Rejected { title, result_codes } => {
                assert_eq!(title, "Transaction Failed");
                assert_eq!(result_codes.operations, vec!["op_too_few_offers".to_string()]);
                assert_eq!(
                    result_codes.to_string(),
                    "tx_fee_bump_inner_failed (inner: tx_failed) [op_too_few_offers]"
                );
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_other_replies_keep_raw_body() {
        let err = HorizonError::from_reply(504, "<html>timeout</html>".to_string());
        assert!(matches!(err, HorizonError::Status { status: 504, .. }));

        let body = r#"{"title": "Timeout", "status": 504}"#;
        assert!(matches!(
            HorizonError::from_reply(504, body.to_string()),
            HorizonError::Status { status: 504, .. }
        ));
    }
}
