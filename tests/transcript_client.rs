use condense::transcript::{TranscriptClient, TranscriptError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

const VIDEO_ID: &str = "dQw4w9WgXcQ";

/// Mount a watch page whose captionTracks point back at the mock server.
async fn mount_watch_page(server: &MockServer, tracks_json: String) {
    let page = format!(
        "<html><body><script>var ytInitialPlayerResponse = \
         {{\"captions\":{{\"playerCaptionsTracklistRenderer\":{{\"captionTracks\":{tracks_json},\
         \"audioTracks\":[]}}}}}};</script></body></html>"
    );

    Mock::given(method("GET"))
        .and(path("/watch"))
        .and(query_param("v", VIDEO_ID))
        .respond_with(ResponseTemplate::new(200).set_body_string(page))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_list_languages() {
    let server = MockServer::start().await;
    let tracks = format!(
        "[{{\"baseUrl\":\"{0}/timedtext?lang=en\",\"languageCode\":\"en\",\
         \"name\":{{\"simpleText\":\"English\"}}}},\
         {{\"baseUrl\":\"{0}/timedtext?lang=ta\",\"languageCode\":\"ta\",\"kind\":\"asr\"}}]",
        server.uri()
    );
    mount_watch_page(&server, tracks).await;

    let client = TranscriptClient::with_base_url(server.uri());
    let languages = client.list_languages(VIDEO_ID).await.unwrap();

    assert_eq!(languages.len(), 2);
    assert_eq!(languages[0].language_code, "en");
    assert_eq!(languages[0].display_name(), "English");
    assert!(languages[1].is_auto_generated());
}

#[tokio::test]
async fn test_fetch_transcript() {
    let server = MockServer::start().await;
    let tracks = format!(
        "[{{\"baseUrl\":\"{}/timedtext?lang=en\",\"languageCode\":\"en\",\
         \"name\":{{\"simpleText\":\"English\"}}}}]",
        server.uri()
    );
    mount_watch_page(&server, tracks).await;

    Mock::given(method("GET"))
        .and(path("/timedtext"))
        .and(query_param("lang", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?><transcript>\
             <text start=\"0\" dur=\"2\">never gonna</text>\
             <text start=\"2\" dur=\"2\">give you up</text>\
             </transcript>",
        ))
        .mount(&server)
        .await;

    let client = TranscriptClient::with_base_url(server.uri());
    let transcript = client.fetch_transcript(VIDEO_ID, "en").await.unwrap();

    assert_eq!(transcript, "never gonna give you up");
}

#[tokio::test]
async fn test_fetch_transcript_language_not_available() {
    let server = MockServer::start().await;
    let tracks = format!(
        "[{{\"baseUrl\":\"{}/timedtext?lang=en\",\"languageCode\":\"en\"}}]",
        server.uri()
    );
    mount_watch_page(&server, tracks).await;

    let client = TranscriptClient::with_base_url(server.uri());
    let result = client.fetch_transcript(VIDEO_ID, "fr").await;

    match result {
        Err(TranscriptError::LanguageNotAvailable {
            requested,
            available,
        }) => {
            assert_eq!(requested, "fr");
            assert_eq!(available, vec!["en".to_string()]);
        }
        other => panic!("Expected LanguageNotAvailable, got {other:?}"),
    }
}

#[tokio::test]
async fn test_captions_disabled() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/watch"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body>no player response</body></html>"),
        )
        .mount(&server)
        .await;

    let client = TranscriptClient::with_base_url(server.uri());
    let result = client.list_languages(VIDEO_ID).await;

    assert!(matches!(result, Err(TranscriptError::CaptionsDisabled)));
}

#[tokio::test]
async fn test_watch_page_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/watch"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = TranscriptClient::with_base_url(server.uri());
    let result = client.list_languages(VIDEO_ID).await;

    assert!(matches!(result, Err(TranscriptError::Fetch(_))));
}
