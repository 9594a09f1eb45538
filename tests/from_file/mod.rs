//! Integration tests running the actual crate binary on files: Test the full E2E path.
//! The geocoding service is replaced by a local HTTP server configured through `geocodeUrl`.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::Path;
use std::process::{Command, Output};
use std::thread::JoinHandle;

use crate::support::write_input;

const YEOKSAM_RESPONSE: &str = r#"{"status":"OK","meta":{"totalCount":1,"page":1,"count":1},"addresses":[{"roadAddress":"서울특별시 강남구 테헤란로 152","jibunAddress":"서울특별시 강남구 역삼동 737","addressElements":[{"types":["SIDO"],"longName":"서울특별시","shortName":"서울특별시","code":""},{"types":["DONGMYUN"],"longName":"역삼동","shortName":"역삼동","code":""}],"x":"127.03","y":"37.50","distance":0.0}],"errorMessage":""}"#;

#[test]
fn csv_input_is_enriched_via_http_service() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "addresses.csv", "jibun,road\n서울 강남구 역삼동 1,\n");
    let (endpoint, server) = serve(1, YEOKSAM_RESPONSE);
    let config = write_config(dir.path(), &input, Some(&endpoint));

    let output = run_binary(dir.path(), &config);

    assert!(
        output.status.success(),
        "binary exited with non-zero status.\nstderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let requests = server.join().unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].contains("x-ncp-apigw-api-key-id: test-id"));

    let written = std::fs::read_to_string(dir.path().join("output.csv")).unwrap();
    assert_eq!(
        written,
        "jibun,road,x,y,naverRoadAddress,naverjibunAddress,dongmyun\n\
         서울 강남구 역삼동 1,,127.03,37.50,서울특별시 강남구 테헤란로 152,서울특별시 강남구 역삼동 737,역삼동\n"
    );

    let info_log = std::fs::read_to_string(dir.path().join("logs").join("info.log")).unwrap();
    assert!(info_log.contains("Total items processed: 1. Successfully fetched: 1. Failed: 0."));
}

#[test]
fn unsupported_file_type_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "addresses.txt", "jibun,road\n역삼동 1,\n");
    let config = write_config(dir.path(), &input, None);

    let output = run_binary(dir.path(), &config);

    assert!(!output.status.success());
    assert!(!dir.path().join("output.csv").exists());
    let error_log = std::fs::read_to_string(dir.path().join("logs").join("error.log")).unwrap();
    assert!(error_log.contains("unsupported file type"));
}

#[test]
fn missing_config_key_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");
    std::fs::write(&config, r#"{ "NAVER_CLIENT_ID": "id" }"#).unwrap();

    let output = run_binary(dir.path(), &config);

    assert!(!output.status.success());
    let error_log = std::fs::read_to_string(dir.path().join("logs").join("error.log")).unwrap();
    assert!(error_log.contains("configuration error"));
}

fn run_binary(dir: &Path, config: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_geocode-enricher"))
        .arg("--config")
        .arg(config)
        .arg("--log-dir")
        .arg(dir.join("logs"))
        .env("APP_ENV", "production")
        .env("NO_PROXY", "127.0.0.1")
        .output()
        .expect("failed to execute binary")
}

fn write_config(dir: &Path, input: &Path, endpoint: Option<&str>) -> std::path::PathBuf {
    let mut config = serde_json::json!({
        "NAVER_CLIENT_ID": "test-id",
        "NAVER_CLIENT_SECRET": "test-secret",
        "inputFilePath": input,
        "jibunColumnName": "jibun",
        "roadColumnName": "road",
    });
    if let Some(endpoint) = endpoint {
        config["geocodeUrl"] = serde_json::Value::String(endpoint.to_string());
    }

    let path = dir.join("config.json");
    std::fs::write(&path, config.to_string()).unwrap();
    path
}

/// Answers `requests` HTTP requests with `body`, returning the lower-cased raw requests.
fn serve(requests: usize, body: &'static str) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local listener");
    let endpoint = format!("http://{}/map-geocode/v2/geocode", listener.local_addr().unwrap());

    let handle = std::thread::spawn(move || {
        let mut received = Vec::with_capacity(requests);
        for _ in 0..requests {
            let (mut stream, _) = listener.accept().expect("accept connection");
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).expect("read request");
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).expect("write response");
            received.push(String::from_utf8_lossy(&request).to_ascii_lowercase());
        }
        received
    });

    (endpoint, handle)
}
