use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Debug)]
#[serde(transparent)]
pub struct TeamId(pub i64);

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct TeamMember {
    pub id: i64,
    pub login: String,
}

/// A team as returned by `/api/teams`. Fields the server sends that are not
/// listed here are ignored.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub manager: Option<TeamMember>,
    #[serde(default)]
    pub substitute: Option<TeamMember>,
    #[serde(default)]
    pub members: Vec<TeamMember>,
}

impl Team {
    pub fn new(id: TeamId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            manager: None,
            substitute: None,
            members: Vec::new(),
        }
    }

    pub fn summary(&self) -> String {
        let members = match self.members.len() {
            1 => "1 member".to_string(),
            n => format!("{} members", n),
        };

        match &self.manager {
            Some(manager) => format!("{}, managed by {}", members, manager.login),
            None => members,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_server_team() {
        let json = r#"{
            "id": 42,
            "name": "Platform",
            "description": null,
            "manager": { "id": 3, "login": "alice", "email": "alice@example.com" },
            "members": [{ "id": 3, "login": "alice" }, { "id": 4, "login": "bob" }],
            "createdDate": "2017-03-01T10:00:00Z"
        }"#;

        let team: Team = serde_json::from_str(json).expect("valid team json");
        assert_eq!(team.id, TeamId(42));
        assert_eq!(team.name, "Platform");
        assert_eq!(team.manager.as_ref().map(|m| m.login.as_str()), Some("alice"));
        assert!(team.substitute.is_none());
        assert_eq!(team.members.len(), 2);
    }

    #[test]
    fn test_summary() {
        let mut team = Team::new(TeamId(1), "Ops");
        assert_eq!(team.summary(), "0 members");

        team.members.push(TeamMember {
            id: 7,
            login: "carol".to_string(),
        });
        assert_eq!(team.summary(), "1 member");

        team.manager = Some(TeamMember {
            id: 7,
            login: "carol".to_string(),
        });
        assert_eq!(team.summary(), "1 member, managed by carol");
    }

    #[test]
    fn test_team_id_display() {
        assert_eq!(TeamId(42).to_string(), "42");
    }
}
