//! Integration tests for the NSE index symbol source

use rsiscan::error::AppError;
use rsiscan::services::symbols::{NseIndexSource, SymbolSource};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const INDEX_CSV: &str = "\
Company Name,Industry,Symbol,Series,ISIN Code
Reliance Industries Ltd.,Energy,RELIANCE,EQ,INE002A01018
Tata Consultancy Services Ltd.,Information Technology,TCS,EQ,INE467B01029
HDFC Bank Ltd.,Financial Services,HDFCBANK,EQ,INE040A01034
";

async fn mounted_source(server: &MockServer, status: u16, body: &str) -> NseIndexSource {
    Mock::given(method("GET"))
        .and(path("/content/indices/ind_nifty50list.csv"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;

    NseIndexSource::with_client(
        format!("{}/content/indices/ind_nifty50list.csv", server.uri()),
        reqwest::Client::new(),
    )
}

#[tokio::test]
async fn extracts_the_symbol_column_from_the_index_csv() {
    let server = MockServer::start().await;
    let source = mounted_source(&server, 200, INDEX_CSV).await;

    let symbols = source.fetch_symbols().await.expect("csv fetch succeeds");
    assert_eq!(
        symbols,
        vec![
            "RELIANCE".to_string(),
            "TCS".to_string(),
            "HDFCBANK".to_string()
        ]
    );
}

#[tokio::test]
async fn http_error_surfaces_as_a_network_error() {
    let server = MockServer::start().await;
    let source = mounted_source(&server, 503, "unavailable").await;

    let err = source.fetch_symbols().await.expect_err("csv fetch fails");
    assert!(matches!(err, AppError::Network(_)), "got {:?}", err);
}

#[tokio::test]
async fn missing_symbol_column_is_a_parse_error() {
    let server = MockServer::start().await;
    let source = mounted_source(&server, 200, "Company Name,Industry\nAcme,Energy\n").await;

    let err = source.fetch_symbols().await.expect_err("csv parse fails");
    assert!(matches!(err, AppError::Parse(_)), "got {:?}", err);
}
