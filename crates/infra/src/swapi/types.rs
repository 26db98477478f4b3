//! Wire types for the SWAPI starship endpoints

use serde::Deserialize;
use shipyard_core::{ListedEntry, StarshipDetail, StarshipPage};

/// `GET /starships?page={n}&limit={limit}`
#[derive(Debug, Deserialize)]
pub(crate) struct PageResponse {
    #[serde(default)]
    pub results: Vec<ListedResult>,
    pub total_pages: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListedResult {
    pub uid: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
}

/// `GET /starships/{uid}`
#[derive(Debug, Deserialize)]
pub(crate) struct DetailResponse {
    pub result: DetailResult,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DetailResult {
    pub properties: DetailProperties,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DetailProperties {
    pub manufacturer: Option<String>,
}

impl From<PageResponse> for StarshipPage {
    fn from(value: PageResponse) -> Self {
        Self {
            entries: value
                .results
                .into_iter()
                .map(|r| ListedEntry { uid: r.uid.unwrap_or_default(), name: r.name, url: r.url })
                .collect(),
            total_pages: value.total_pages,
        }
    }
}

impl From<DetailResponse> for StarshipDetail {
    fn from(value: DetailResponse) -> Self {
        Self { manufacturer: value.result.properties.manufacturer }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_tolerates_missing_fields() {
        let json = r#"{
            "message": "ok",
            "total_records": 3,
            "total_pages": 1,
            "results": [
                {"uid": "2", "name": "CR90 corvette", "url": "https://www.swapi.tech/api/starships/2"},
                {"name": "no uid"},
                {"uid": "3", "name": null}
            ]
        }"#;

        let page: StarshipPage = serde_json::from_str::<PageResponse>(json).unwrap().into();

        assert_eq!(page.total_pages, 1);
        assert_eq!(page.entries.len(), 3);
        assert_eq!(page.entries[1].uid, "");
        assert_eq!(page.entries[2].name, None);
    }

    #[test]
    fn detail_reads_nested_manufacturer() {
        let json = r#"{
            "message": "ok",
            "result": {
                "uid": "10",
                "properties": {"name": "Millennium Falcon", "manufacturer": "Corellian Engineering Corporation"}
            }
        }"#;

        let detail: StarshipDetail = serde_json::from_str::<DetailResponse>(json).unwrap().into();
        assert_eq!(detail.manufacturer.as_deref(), Some("Corellian Engineering Corporation"));
    }

    #[test]
    fn detail_without_manufacturer_is_none() {
        let json = r#"{"result": {"properties": {"name": "Death Star"}}}"#;
        let detail: StarshipDetail = serde_json::from_str::<DetailResponse>(json).unwrap().into();
        assert_eq!(detail.manufacturer, None);
    }
}
