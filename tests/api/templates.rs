use crate::helpers::spawn_app;
use serde_json::{Value, json};

fn sample_template() -> Value {
    json!({
        "subject": "March Campaign",
        "layers": [
            { "order": 1, "heading_h2": { "text": "Offers" }, "body": "Spring offers inside" }
        ]
    })
}

#[tokio::test]
async fn saved_template_can_be_listed_loaded_and_deleted() {
    let app = spawn_app().await;

    let response = app.upsert_template("march campaign", &sample_template()).await;
    assert_eq!(response.status().as_u16(), 200);

    let listed: Value = app.list_templates().await.json().await.unwrap();
    assert_eq!(listed["names"], json!(["march campaign"]));

    let loaded: Value = app.get_template("march campaign").await.json().await.unwrap();
    assert_eq!(loaded["subject"], "March Campaign");
    assert_eq!(loaded["layers"][0]["heading_h2"]["text"], "Offers");

    let response = app.delete_template("march campaign").await;
    assert_eq!(response.status().as_u16(), 200);

    let listed: Value = app.list_templates().await.json().await.unwrap();
    assert_eq!(listed["names"], json!([]));
}

#[tokio::test]
async fn upsert_overwrites_an_existing_template() {
    let app = spawn_app().await;

    app.upsert_template("campaign", &sample_template()).await;
    let mut updated = sample_template();
    updated["subject"] = json!("April Campaign");
    app.upsert_template("campaign", &updated).await;

    let loaded: Value = app.get_template("campaign").await.json().await.unwrap();
    assert_eq!(loaded["subject"], "April Campaign");

    let listed: Value = app.list_templates().await.json().await.unwrap();
    assert_eq!(listed["names"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn loading_an_unknown_template_returns_404() {
    let app = spawn_app().await;

    let response = app.get_template("missing").await;
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn deleting_an_unknown_template_returns_404() {
    let app = spawn_app().await;

    let response = app.delete_template("missing").await;
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn invalid_template_names_are_rejected() {
    let app = spawn_app().await;

    // Path traversal is encoded so it reaches the handler as one segment
    let response = app.upsert_template("..%2Fescape", &sample_template()).await;
    assert_eq!(response.status().as_u16(), 400);

    let response = app.upsert_template(".hidden", &sample_template()).await;
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn a_loaded_template_previews_identically_to_its_source() {
    let app = spawn_app().await;

    app.upsert_template("campaign", &sample_template()).await;
    let loaded: Value = app.get_template("campaign").await.json().await.unwrap();

    let direct: Value = app
        .preview_newsletter(&sample_template())
        .await
        .json()
        .await
        .unwrap();
    let from_template: Value = app.preview_newsletter(&loaded).await.json().await.unwrap();

    assert_eq!(direct["html"], from_template["html"]);
}
