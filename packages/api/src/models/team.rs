use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{is_blank, Entity};
use crate::error::ApiError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub team_id: i64,
    pub team_name: String,
    #[serde(default)]
    pub created_at: Option<NaiveDate>,
    #[serde(default)]
    pub updated_at: Option<NaiveDate>,
}

impl Entity for Team {
    fn id(&self) -> i64 {
        self.team_id
    }
}

/// Body of `POST /teams/` and `PUT /teams/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TeamPayload {
    pub team_name: String,
}

impl TeamPayload {
    pub fn validate(&self) -> Result<(), ApiError> {
        if is_blank(&self.team_name) {
            return Err(ApiError::Validation("Team name is required".into()));
        }
        Ok(())
    }

    /// Apply the new name to an existing team, keeping its dates.
    pub fn apply(self, team: &Team) -> Team {
        Team {
            team_name: self.team_name,
            ..team.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_name_required() {
        assert!(TeamPayload::default().validate().is_err());
        assert!(TeamPayload {
            team_name: "Platform".into()
        }
        .validate()
        .is_ok());
    }

    #[test]
    fn test_decode_with_dates() {
        let team: Team = serde_json::from_str(
            r#"{"team_id": 3, "team_name": "Ops", "created_at": "2024-01-05", "updated_at": "2024-02-01"}"#,
        )
        .unwrap();
        assert_eq!(team.created_at, NaiveDate::from_ymd_opt(2024, 1, 5));

        let renamed = TeamPayload {
            team_name: "SRE".into(),
        }
        .apply(&team);
        assert_eq!(renamed.team_name, "SRE");
        assert_eq!(renamed.created_at, team.created_at);
    }
}
