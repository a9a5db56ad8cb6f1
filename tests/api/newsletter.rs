use crate::helpers::spawn_app;
use serde_json::{Value, json};

fn sample_document() -> Value {
    json!({
        "subject": "Weekly Update",
        "layers": [
            {
                "order": 1,
                "heading_h2": { "text": "Welcome" },
                "body": "Hi\nthere"
            }
        ],
        "footer": {
            "company_name": { "text": "Acme GmbH" }
        }
    })
}

#[tokio::test]
async fn preview_returns_html_filename_and_no_warnings() {
    let app = spawn_app().await;

    let response = app.preview_newsletter(&sample_document()).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    let html = body["html"].as_str().unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(">Welcome</h2>"));
    assert!(html.contains("Hi<br>there</p>"));
    assert_eq!(
        body["filename"].as_str().unwrap(),
        "Weekly_Update_newsletter.html"
    );
    assert_eq!(body["warnings"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn preview_is_deterministic_across_calls() {
    let app = spawn_app().await;

    let first: Value = app
        .preview_newsletter(&sample_document())
        .await
        .json()
        .await
        .unwrap();
    let second: Value = app
        .preview_newsletter(&sample_document())
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(first["html"], second["html"]);
}

#[tokio::test]
async fn generate_sets_the_attachment_filename() {
    let app = spawn_app().await;

    let response = app.generate_newsletter(&sample_document()).await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response
            .headers()
            .get("Content-Disposition")
            .and_then(|v| v.to_str().ok()),
        Some("attachment; filename=\"Weekly_Update_newsletter.html\"")
    );

    let html = response.text().await.unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.ends_with("</html>"));
}

#[tokio::test]
async fn layer_and_social_links_survive_into_the_rendered_document() {
    let app = spawn_app().await;

    let payload = json!({
        "subject": "Weekly Update",
        "layers": [
            {
                "order": 1,
                "heading_h2": { "text": "Welcome" },
                "body": "Read more",
                "link_url": "https://campaign.test/read-more"
            }
        ],
        "footer": {
            "social_links": [
                { "platform": "LinkedIn", "url": "https://linkedin.test/acme" }
            ]
        }
    });

    let body: Value = app.preview_newsletter(&payload).await.json().await.unwrap();
    let html = body["html"].as_str().unwrap();

    let links: Vec<String> = linkify::LinkFinder::new()
        .links(html)
        .filter(|l| *l.kind() == linkify::LinkKind::Url)
        .map(|l| l.as_str().to_string())
        .collect();

    assert!(links.iter().any(|l| l == "https://campaign.test/read-more"));
    assert!(links.iter().any(|l| l == "https://linkedin.test/acme"));
}

#[tokio::test]
async fn preview_returns_400_for_invalid_documents() {
    let app = spawn_app().await;

    let invalid_cases = vec![
        (json!({ "subject": "  " }), "blank subject"),
        (
            json!({ "subject": "Update", "max_width_px": 5000 }),
            "max width out of range",
        ),
        (
            json!({
                "subject": "Update",
                "layers": [
                    { "order": 1, "body": "a" },
                    { "order": 1, "body": "b" },
                ]
            }),
            "duplicate layer orders",
        ),
        (
            json!({ "subject": "Update", "font_family": "papyrus" }),
            "unknown font family",
        ),
    ];

    for (invalid_body, desc) in invalid_cases {
        let response = app.preview_newsletter(&invalid_body).await;
        assert_eq!(
            400,
            response.status().as_u16(),
            "Did not return 400 when payload had {desc}"
        );
    }
}

#[tokio::test]
async fn undecodable_embedded_image_degrades_with_a_warning() {
    let app = spawn_app().await;

    let payload = json!({
        "subject": "Weekly Update",
        "layers": [
            {
                "order": 1,
                "heading_h2": { "text": "Welcome" },
                "body": "Hello",
                "image": {
                    // Valid base64, but not an image
                    "source": { "data_base64": "bm90IGFuIGltYWdl", "mime_type": "image/png" }
                }
            }
        ]
    });

    let response = app.preview_newsletter(&payload).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    let html = body["html"].as_str().unwrap();
    assert!(!html.contains("<img"));
    assert!(html.contains(">Welcome</h2>"));

    let warnings = body["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].as_str().unwrap().contains("layer 1"));
}

#[tokio::test]
async fn external_image_url_wins_over_embedded_bytes() {
    let app = spawn_app().await;

    let payload = json!({
        "subject": "Weekly Update",
        "layers": [
            {
                "order": 1,
                "body": "Hello",
                "image": {
                    "source": {
                        "url": "https://cdn.test/banner.png",
                        "data_base64": "bm90IGFuIGltYWdl",
                        "mime_type": "image/png"
                    }
                }
            }
        ]
    });

    let body: Value = app.preview_newsletter(&payload).await.json().await.unwrap();
    let html = body["html"].as_str().unwrap();
    assert!(html.contains("<img src=\"https://cdn.test/banner.png\""));
    assert!(!html.contains("data:image"));
    assert_eq!(body["warnings"].as_array().unwrap().len(), 0);
}
