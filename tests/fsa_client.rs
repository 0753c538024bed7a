use fsa_ratings::config::ApiConfig;
use fsa_ratings::error::{ApiError, FetchError};
use fsa_ratings::fetch::{ApiVersion, BasicClient};
use fsa_ratings::infra::fsa::FsaClient;
use fsa_ratings::services::ratings_api::RatingsApi;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;

struct Stub {
    addr: String,
    requests: mpsc::Receiver<String>,
}

/// Serves one canned HTTP response per entry in `responses`, in order, and
/// forwards each raw request head it receives.
fn serve(responses: Vec<(u16, &'static str)>) -> Stub {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub");
    let addr = listener.local_addr().expect("local addr").to_string();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        for (status, body) in responses {
            let (mut stream, _) = listener.accept().expect("accept");

            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).expect("read request");
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
            }
            let _ = tx.send(String::from_utf8_lossy(&head).into_owned());

            let response = format!(
                "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).expect("write response");
            stream.flush().expect("flush");
        }
    });

    Stub {
        addr,
        requests: rx,
    }
}

fn client_for(addr: &str) -> FsaClient {
    let config = ApiConfig {
        authorities_url: format!("http://{addr}/Authorities/basic"),
        establishments_url: format!("http://{addr}/Establishments?localAuthorityId={{authorityId}}"),
        ..ApiConfig::default()
    };
    // Keep ambient proxy settings away from the loopback stub.
    let reqwest_client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("build reqwest client");
    let http = ApiVersion::new(BasicClient::from(reqwest_client), &config.api_version)
        .expect("api version header");
    FsaClient::with_client(http, config)
}

#[tokio::test]
async fn test_fetch_authorities_sends_api_version_header() {
    let stub = serve(vec![(
        200,
        r#"{"authorities": [{"Name": "York", "LocalAuthorityId": 2}, {"Name": "Leeds", "LocalAuthorityId": 1}]}"#,
    )]);
    let client = client_for(&stub.addr);

    let dir = client.fetch_authority_directory().await.unwrap();

    assert_eq!(dir.names().collect::<Vec<_>>(), vec!["Leeds", "York"]);

    let request = stub.requests.recv().unwrap().to_lowercase();
    assert!(request.starts_with("get /authorities/basic "), "{request}");
    assert!(request.contains("x-api-version: 2"), "{request}");
}

#[tokio::test]
async fn test_fetch_establishments_substitutes_authority_id() {
    let stub = serve(vec![(
        200,
        r#"{"establishments": [{"RatingValue": "Pass", "SchemeType": "FHIS"}, {"RatingValue": "Exempt", "SchemeType": "FHIS"}]}"#,
    )]);
    let client = client_for(&stub.addr);

    let dist = client.fetch_rating_distribution(197).await.unwrap();

    assert_eq!(dist.get("Pass"), Some(50.0));
    assert_eq!(dist.get("Improvement Required"), Some(0.0));
    assert_eq!(dist.get("Exempt"), Some(50.0));

    let request = stub.requests.recv().unwrap();
    assert!(
        request.starts_with("GET /Establishments?localAuthorityId=197 "),
        "{request}"
    );
}

#[tokio::test]
async fn test_non_200_status_is_establishments_unavailable() {
    let stub = serve(vec![(500, r#"{"message": "boom"}"#)]);
    let client = client_for(&stub.addr);

    let err = client.fetch_establishments(7).await.unwrap_err();

    assert!(
        matches!(
            err,
            ApiError::EstablishmentsUnavailable {
                authority_id: 7,
                source: FetchError::Status { status: 500 },
            }
        ),
        "{err:?}"
    );
}

#[tokio::test]
async fn test_malformed_document_is_data_format_error() {
    let stub = serve(vec![(200, r#"{"establishments": [{"SchemeType": "FHRS"}]}"#)]);
    let client = client_for(&stub.addr);

    let err = client.fetch_establishments(1).await.unwrap_err();

    match err {
        ApiError::DataFormat(e) => assert_eq!(e.document, "establishments"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_host_is_directory_unavailable() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("reserve addr");
        listener.local_addr().expect("local addr").to_string()
    };
    let client = client_for(&addr);

    let err = client.fetch_authorities().await.unwrap_err();

    assert!(
        matches!(err, ApiError::DirectoryUnavailable(FetchError::Http(_))),
        "{err:?}"
    );
}

#[test]
fn test_invalid_api_version_is_rejected() {
    let config = ApiConfig {
        api_version: "2\n".to_string(),
        ..ApiConfig::default()
    };
    assert!(matches!(FsaClient::new(config), Err(ApiError::Client(_))));
}
