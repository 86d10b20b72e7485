//! Google Sheets v4 REST backend (blocking client).
//!
//! One spreadsheet, one sheet per month. `save` is `values:clear` followed
//! by a RAW `values.update` of the whole grid; the two calls are not
//! atomic, so a failure in between leaves an empty sheet.

use super::SheetStore;
use super::auth::Credentials;
use crate::core::codec::Grid;
use crate::errors::{AppError, AppResult};
use crate::models::Month;
use reqwest::StatusCode;
use reqwest::Url;
use reqwest::blocking::{Client, Response};
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "https://sheets.googleapis.com";

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateBody<'a> {
    range: &'a str,
    major_dimension: &'static str,
    values: &'a [Vec<String>],
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

#[derive(Debug)]
pub struct GoogleSheetsStore {
    client: Client,
    base_url: Url,
    spreadsheet_id: String,
    access_token: String,
}

impl GoogleSheetsStore {
    /// Connect to `spreadsheet_id`, minting an access token first when
    /// `credentials` is a service account.
    pub fn new(base_url: &str, spreadsheet_id: &str, credentials: &Credentials) -> AppResult<Self> {
        require_spreadsheet_id(spreadsheet_id)?;

        let client = Client::new();
        let access_token = credentials.access_token(&client)?;
        Self::with_client(client, base_url, spreadsheet_id, &access_token)
    }

    /// Same as `new` with a caller-built HTTP client and a ready token.
    pub fn with_client(
        client: Client,
        base_url: &str,
        spreadsheet_id: &str,
        access_token: &str,
    ) -> AppResult<Self> {
        require_spreadsheet_id(spreadsheet_id)?;
        if access_token.trim().is_empty() {
            return Err(AppError::Config(
                "access token is empty (check access_token or the service account)".into(),
            ));
        }

        let base_url = Url::parse(base_url)
            .map_err(|e| AppError::Config(format!("invalid api_base_url '{base_url}': {e}")))?;

        Ok(Self {
            client,
            base_url,
            spreadsheet_id: spreadsheet_id.trim().to_string(),
            access_token: access_token.trim().to_string(),
        })
    }

    /// `values/{range}{suffix}` endpoint for the month sheet.
    fn values_url(&self, month: Month, suffix: &str) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::Config(format!("invalid api_base_url '{}'", self.base_url)))?
            .pop_if_empty()
            .extend([
                "v4",
                "spreadsheets",
                self.spreadsheet_id.as_str(),
                "values",
                &format!("{}{}", sheet_range(month), suffix),
            ]);
        Ok(url)
    }

    fn check(month: Month, resp: Response) -> AppResult<Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().unwrap_or_default();
        let message = api_error_message(&body);

        if status == StatusCode::BAD_REQUEST && message.contains("Unable to parse range") {
            return Err(AppError::SheetNotFound(month.sheet_name().to_string()));
        }

        Err(AppError::SheetsApi {
            status: status.as_u16(),
            message,
        })
    }
}

impl SheetStore for GoogleSheetsStore {
    fn load(&self, month: Month) -> AppResult<Grid> {
        let url = self.values_url(month, "")?;
        let resp = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .send()?;

        let range: ValueRange = Self::check(month, resp)?.json()?;
        Ok(range.values)
    }

    fn save(&mut self, month: Month, grid: &[Vec<String>]) -> AppResult<()> {
        let clear_url = self.values_url(month, ":clear")?;
        let resp = self
            .client
            .post(clear_url)
            .bearer_auth(&self.access_token)
            .json(&serde_json::json!({}))
            .send()?;
        Self::check(month, resp)?;

        let range = sheet_range(month);
        let mut update_url = self.values_url(month, "")?;
        update_url
            .query_pairs_mut()
            .append_pair("valueInputOption", "RAW");

        let body = UpdateBody {
            range: &range,
            major_dimension: "ROWS",
            values: grid,
        };
        let resp = self
            .client
            .put(update_url)
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()?;
        Self::check(month, resp)?;

        Ok(())
    }

    fn describe(&self) -> String {
        format!("spreadsheet {}", self.spreadsheet_id)
    }
}

fn require_spreadsheet_id(spreadsheet_id: &str) -> AppResult<()> {
    if spreadsheet_id.trim().is_empty() {
        return Err(AppError::Config(
            "spreadsheet_id is not set (config file or SHIFTPLAN_SHEET_ID)".into(),
        ));
    }
    Ok(())
}

/// A1 range covering a whole sheet: the quoted sheet name.
fn sheet_range(month: Month) -> String {
    format!("'{}'", month.sheet_name().replace('\'', "''"))
}

/// Pull `error.message` out of an API error body, falling back to the raw text.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_server::serve;
    use serde_json::json;

    fn local_store(base: &str) -> GoogleSheetsStore {
        let client = Client::builder().no_proxy().build().unwrap();
        GoogleSheetsStore::with_client(client, base, "sheet-1", "secret").unwrap()
    }

    fn grid(rows: &[&[&str]]) -> Grid {
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn values_url_quotes_and_encodes_the_sheet_name() {
        let store = GoogleSheetsStore::new(
            DEFAULT_API_BASE_URL,
            "abc123",
            &Credentials::AccessToken("token".into()),
        )
        .unwrap();
        let url = store.values_url(Month::March, ":clear").unwrap();

        assert_eq!(
            url.as_str(),
            "https://sheets.googleapis.com/v4/spreadsheets/abc123/values/'B%C5%99ezen':clear"
        );
    }

    #[test]
    fn missing_settings_are_a_config_error() {
        assert!(matches!(
            GoogleSheetsStore::new(
                DEFAULT_API_BASE_URL,
                "",
                &Credentials::AccessToken("token".into())
            ),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            GoogleSheetsStore::with_client(Client::new(), DEFAULT_API_BASE_URL, "abc", " "),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn error_message_is_extracted_from_api_body() {
        let body = r#"{"error":{"code":400,"message":"Unable to parse range: 'Leden'","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(api_error_message(body), "Unable to parse range: 'Leden'");
        assert_eq!(api_error_message("Bad Gateway\n"), "Bad Gateway");
    }

    #[test]
    fn load_returns_the_values_grid() {
        let (base, server) = serve(vec![(
            "200 OK",
            r#"{"range":"'Leden'!A1:R2","majorDimension":"ROWS","values":[["Datum","Vozidlo"],["05.01.2026","Dodávka"]]}"#.into(),
        )]);

        let store = local_store(&base);
        let loaded = store.load(Month::January).unwrap();

        assert_eq!(loaded, grid(&[&["Datum", "Vozidlo"], &["05.01.2026", "Dodávka"]]));

        let seen = server.join().unwrap();
        assert!(
            seen[0]
                .request_line
                .starts_with("GET /v4/spreadsheets/sheet-1/values/'Leden' ")
        );
    }

    #[test]
    fn empty_sheet_has_no_values_field() {
        let (base, server) = serve(vec![("200 OK", r#"{"range":"'Srpen'!A1:Z1000"}"#.into())]);

        let store = local_store(&base);
        assert!(store.load(Month::August).unwrap().is_empty());
        server.join().unwrap();
    }

    #[test]
    fn unknown_sheet_maps_to_sheet_not_found() {
        let (base, server) = serve(vec![(
            "400 Bad Request",
            r#"{"error":{"code":400,"message":"Unable to parse range: 'Září'","status":"INVALID_ARGUMENT"}}"#.into(),
        )]);

        let store = local_store(&base);
        let err = store.load(Month::September).unwrap_err();
        assert!(matches!(err, AppError::SheetNotFound(ref s) if s == "Září"));
        server.join().unwrap();
    }

    #[test]
    fn save_clears_then_writes_the_whole_grid_raw() {
        let (base, server) = serve(vec![
            ("200 OK", r#"{"spreadsheetId":"sheet-1","clearedRange":"'Leden'!A1:R3"}"#.into()),
            ("200 OK", r#"{"spreadsheetId":"sheet-1","updatedRows":2}"#.into()),
        ]);

        let mut store = local_store(&base);
        store
            .save(Month::January, &grid(&[&["Datum"], &["01.01.2026"]]))
            .unwrap();

        let seen = server.join().unwrap();
        assert_eq!(seen.len(), 2);

        assert!(
            seen[0]
                .request_line
                .starts_with("POST /v4/spreadsheets/sheet-1/values/'Leden':clear ")
        );
        assert_eq!(seen[0].body, "{}");

        assert!(seen[1].request_line.starts_with(
            "PUT /v4/spreadsheets/sheet-1/values/'Leden'?valueInputOption=RAW "
        ));
        let body: serde_json::Value = serde_json::from_str(&seen[1].body).unwrap();
        assert_eq!(
            body,
            json!({
                "range": "'Leden'",
                "majorDimension": "ROWS",
                "values": [["Datum"], ["01.01.2026"]]
            })
        );
    }

    #[test]
    fn failed_clear_stops_before_writing() {
        let (base, server) = serve(vec![(
            "500 Internal Server Error",
            r#"{"error":{"code":500,"message":"Internal error encountered.","status":"INTERNAL"}}"#.into(),
        )]);

        let mut store = local_store(&base);
        let err = store
            .save(Month::January, &grid(&[&["Datum"], &["01.01.2026"]]))
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::SheetsApi { status: 500, ref message } if message == "Internal error encountered."
        ));

        let seen = server.join().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].request_line.starts_with("POST "));
    }
}
