use serde::{Deserialize, Serialize};
use std::io::Read;

use crate::error::GraphError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub reward: f64,
    #[serde(default)]
    pub base: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub from: String,
    pub to: String,
    pub cost: f64,
}

/// In-memory shape of a graph file: the city list (index = position) and the
/// connections between them, named by city.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDescription {
    pub cities: Vec<City>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

impl GraphDescription {
    pub fn from_json_str(json: &str) -> Result<Self, GraphError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, GraphError> {
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_graph_file_shape() {
        let json = r#"{
            "cities": [
                { "name": "Madrid", "reward": 0, "base": true },
                { "name": "Toledo", "reward": 12.5, "base": false },
                { "name": "Segovia", "reward": 8 }
            ],
            "connections": [
                { "from": "Madrid", "to": "Toledo", "cost": 3 }
            ]
        }"#;

        let desc = GraphDescription::from_json_str(json).unwrap();
        assert_eq!(desc.cities.len(), 3);
        assert!(desc.cities[0].base);
        assert!(!desc.cities[2].base);
        assert_eq!(desc.cities[1].reward, 12.5);
        assert_eq!(desc.connections[0].to, "Toledo");
        assert_eq!(desc.connections[0].cost, 3.0);
    }

    #[test]
    fn rejects_malformed_json() {
        let err = GraphDescription::from_json_str("{ \"cities\": 4 }").unwrap_err();
        assert!(matches!(err, GraphError::Parse(_)));
    }
}
