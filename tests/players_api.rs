mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{app, send};

#[tokio::test]
async fn read_players_ok() {
    let (status, body) = send(&app(), Method::GET, "/players", None).await;

    assert_eq!(status, StatusCode::OK);
    let players = body.as_array().unwrap();
    assert_eq!(players.len(), 6);
    assert_eq!(
        players[0],
        json!({ "id": 1, "name": "J1", "isGuardian": false, "teamName": "E1" })
    );
}

#[tokio::test]
async fn read_teams_ok() {
    let (status, body) = send(&app(), Method::GET, "/teams", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "id": 1, "name": "E1" },
            { "id": 2, "name": "E2" },
            { "id": 3, "name": "E3" }
        ])
    );
}

#[tokio::test]
async fn create_players_ok() {
    let app = app();
    let to_create = json!([{ "id": 7, "name": "J7", "isGuardian": true, "teamName": "E2" }]);

    let (status, body) = send(&app, Method::POST, "/players", Some(to_create.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, to_create);

    let (_, players) = send(&app, Method::GET, "/players", None).await;
    assert_eq!(players.as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn create_player_with_unknown_team_is_not_found() {
    let to_create = json!([{ "id": 7, "name": "J7", "isGuardian": false, "teamName": "E9" }]);
    let (status, body) = send(&app(), Method::POST, "/players", Some(to_create)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Team#E9 not found");
}

#[tokio::test]
async fn update_players_ok() {
    let app = app();
    let to_update = json!([{ "id": 3, "name": "J3 renamed" }]);

    let (status, body) = send(&app, Method::PUT, "/players", Some(to_update)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{ "id": 3, "name": "J3 renamed", "isGuardian": false, "teamName": "E2" }])
    );

    let (_, second) = send(&app, Method::GET, "/matches/2", None).await;
    assert_eq!(second["teamA"]["scorers"][0]["player"]["name"], "J3 renamed");
}

#[tokio::test]
async fn update_unknown_player_is_not_found() {
    let to_update = json!([{ "id": 99, "isGuardian": true }]);
    let (status, body) = send(&app(), Method::PUT, "/players", Some(to_update)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Player#99 not found");
}

#[tokio::test]
async fn root_serves_a_banner() {
    let (status, body) = send(&app(), Method::GET, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("Football Matches API"));
}

#[tokio::test]
async fn moving_a_player_keeps_past_results() {
    let app = app();
    let moved = json!([{ "id": 3, "name": "J3", "isGuardian": false, "teamName": "E1" }]);

    let (status, _) = send(&app, Method::POST, "/players", Some(moved)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, second) = send(&app, Method::GET, "/matches/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["teamA"]["score"], 2);
    assert_eq!(second["teamA"]["scorers"][0]["player"]["name"], "J3");
    assert_eq!(second["teamA"]["scorers"][0]["scoreTime"], 70);
    assert_eq!(second["teamA"]["scorers"][1]["player"]["name"], "J6");
    assert_eq!(second["teamA"]["scorers"][1]["scoreTime"], 80);
    assert_eq!(second["teamB"]["score"], 0);
}

#[tokio::test]
async fn malformed_player_payload_is_a_json_bad_request() {
    let to_create = json!({ "id": 7, "name": "J7" });
    let (status, body) = send(&app(), Method::POST, "/players", Some(to_create)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Bad request");
}
