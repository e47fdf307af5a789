//! Action tests for the diary screen controller: delete, publish, edit routing, analyze.

mod common;

use std::sync::Arc;

use common::{diary_ok, emotion_ok, ScriptedClient};
use my_diary::{
    ApiResponse, ControllerError, DiaryController, EditRouterState, EditTarget, Method,
    NavigationRequest, Route,
};

/// A controller whose diary 42 (emotionId 7 on the record) has already loaded,
/// with the self-emotion lookup resolving to `resolved_emotion`
async fn loaded_controller(
    resolved_emotion: i64,
) -> (DiaryController<Arc<ScriptedClient>>, Arc<ScriptedClient>) {
    let client = Arc::new(
        ScriptedClient::new()
            .respond(diary_ok(7))
            .respond(emotion_ok(resolved_emotion)),
    );
    let mut controller = DiaryController::new(client.clone(), "42", Some("tok".to_string()));
    assert!(controller.reload().await.is_ready());
    (controller, client)
}

// ── Delete ──

#[tokio::test]
async fn test_delete_success_resets_to_root() {
    let (controller, client) = loaded_controller(7).await;
    client.push(ApiResponse::empty(200));

    let ack = controller.delete().await;

    assert_eq!(ack.title, "일기 삭제");
    assert_eq!(ack.message, "일기가 성공적으로 삭제되었습니다.");
    assert_eq!(ack.on_confirm, Some(NavigationRequest::Reset(Route::root())));
    assert_eq!(
        client.calls().last(),
        Some(&(Method::Delete, "/diaries/42".to_string()))
    );
    assert!(controller.view().is_ready());
}

#[tokio::test]
async fn test_delete_failure_keeps_view_and_does_not_navigate() {
    let (controller, client) = loaded_controller(7).await;
    let before = controller.view().clone();
    client.push(ApiResponse::with_error(409, "already shared"));

    let ack = controller.delete().await;

    assert_eq!(ack.title, "삭제 실패");
    assert_eq!(ack.message, "already shared");
    assert_eq!(ack.on_confirm, None);
    assert_eq!(controller.view(), &before);
}

#[tokio::test]
async fn test_delete_transport_error_uses_fallback() {
    // nothing queued after the load, so the scripted client errors
    let (controller, _client) = loaded_controller(7).await;

    let ack = controller.delete().await;

    assert_eq!(ack.title, "삭제 실패");
    assert_eq!(ack.message, "일기 삭제에 실패했습니다.");
    assert_eq!(ack.on_confirm, None);
}

#[tokio::test]
async fn test_delete_works_from_failed_view() {
    let client = Arc::new(
        ScriptedClient::new()
            .respond(ApiResponse::with_error(500, "boom"))
            .respond(ApiResponse::empty(200)),
    );
    let mut controller = DiaryController::new(client.clone(), "42", None);
    assert!(controller.reload().await.error().is_some());

    let ack = controller.delete().await;

    assert_eq!(ack.on_confirm, Some(NavigationRequest::Reset(Route::root())));
}

#[tokio::test]
async fn test_delete_without_identifier_issues_no_request() {
    let client = Arc::new(ScriptedClient::new());
    let controller = DiaryController::new(client.clone(), "", None);

    let ack = controller.delete().await;

    assert_eq!(ack.title, "오류");
    assert_eq!(ack.on_confirm, None);
    assert!(client.requests().is_empty());
}

#[tokio::test]
async fn test_delete_dot_segment_id_issues_no_request() {
    for diary_id in [".", ".."] {
        let client = Arc::new(ScriptedClient::new());
        let controller = DiaryController::new(client.clone(), diary_id, None);

        let ack = controller.delete().await;

        assert_eq!(ack.title, "오류");
        assert_eq!(ack.message, "diaryId가 없습니다.");
        assert!(client.requests().is_empty(), "id {:?} was sent", diary_id);
    }
}

#[tokio::test]
async fn test_delete_targets_only_the_named_diary() {
    let client = Arc::new(ScriptedClient::new().respond(ApiResponse::empty(200)));
    let controller = DiaryController::new(client.clone(), "a#b", None);

    let ack = controller.delete().await;

    assert_eq!(ack.title, "일기 삭제");
    assert_eq!(
        client.calls(),
        vec![(Method::Delete, "/diaries/a%23b".to_string())]
    );
}

// ── Publish ──

#[tokio::test]
async fn test_publish_created_closes_prompt() {
    let (mut controller, client) = loaded_controller(7).await;
    client.push(ApiResponse::empty(201));

    controller.request_publish().unwrap();
    assert!(controller.is_publish_confirmation_open());

    let ack = controller.confirm_publish().await.unwrap();

    assert_eq!(ack.title, "게시 완료");
    assert_eq!(ack.message, "일기가 커뮤니티에 게시되었습니다.");
    assert!(!controller.is_publish_confirmation_open());

    let request = client.requests().pop().unwrap();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.path, "/public-diaries?personalDiaryId=42");
    assert_eq!(request.auth_token.as_deref(), Some("tok"));
}

#[tokio::test]
async fn test_publish_rejected_leaves_prompt_open() {
    let (mut controller, client) = loaded_controller(7).await;
    // 200 is not the created status
    client.push(ApiResponse::empty(200));

    controller.request_publish().unwrap();
    let ack = controller.confirm_publish().await.unwrap();

    assert_eq!(ack.title, "게시 실패");
    assert_eq!(ack.message, "커뮤니티 게시에 실패했습니다.");
    assert!(controller.is_publish_confirmation_open());
    assert!(controller.view().is_ready());

    controller.decline_publish();
    assert!(!controller.is_publish_confirmation_open());
}

#[tokio::test]
async fn test_publish_server_message_and_transport_error() {
    let (mut controller, client) = loaded_controller(7).await;
    client.push(ApiResponse::with_error(400, "이미 게시된 일기입니다."));

    controller.request_publish().unwrap();
    let ack = controller.confirm_publish().await.unwrap();
    assert_eq!(ack.message, "이미 게시된 일기입니다.");

    // nothing queued: transport failure, user may retry from the open prompt
    let ack = controller.confirm_publish().await.unwrap();
    assert_eq!(ack.title, "게시 실패");
    assert_eq!(ack.message, "커뮤니티 게시에 실패했습니다.");
    assert!(controller.is_publish_confirmation_open());
}

#[tokio::test]
async fn test_publish_requires_confirmation_and_ready_view() {
    let (mut controller, client) = loaded_controller(7).await;
    let calls = client.requests().len();

    let err = controller.confirm_publish().await.unwrap_err();
    assert!(matches!(err, ControllerError::ActionUnavailable { action: "publish", .. }));
    assert_eq!(client.requests().len(), calls);

    let mut loading = DiaryController::new(Arc::new(ScriptedClient::new()), "42", None);
    assert!(loading.request_publish().is_err());
    assert!(!loading.is_publish_confirmation_open());
}

#[tokio::test]
async fn test_new_cycle_closes_publish_prompt() {
    let (mut controller, _client) = loaded_controller(7).await;
    controller.request_publish().unwrap();

    controller.begin_load();

    assert!(!controller.is_publish_confirmation_open());
}

// ── Edit routing ──

#[tokio::test]
async fn test_edit_emotion_carries_resolved_emotion() {
    let (mut controller, client) = loaded_controller(3).await;
    let calls = client.requests().len();

    controller.request_edit().unwrap();
    assert_eq!(controller.edit_state(), EditRouterState::ConfirmingEditTarget);

    let nav = controller.choose_edit_target(EditTarget::Emotion).unwrap();

    assert_eq!(
        nav,
        NavigationRequest::Navigate(Route::DiaryEmotion {
            diary_id: Some("42".to_string()),
            emotion_id: Some(3),
        })
    );
    assert_eq!(
        controller.edit_state(),
        EditRouterState::Routed(EditTarget::Emotion)
    );
    // routing is not a remote call
    assert_eq!(client.requests().len(), calls);
}

#[tokio::test]
async fn test_edit_content_carries_only_diary_id() {
    let (mut controller, _client) = loaded_controller(3).await;

    controller.request_edit().unwrap();
    let nav = controller.choose_edit_target(EditTarget::Content).unwrap();

    assert_eq!(
        nav,
        NavigationRequest::Navigate(Route::Dailys {
            diary_id: "42".to_string()
        })
    );
}

#[tokio::test]
async fn test_edit_dismiss_and_out_of_state_calls() {
    let (mut controller, _client) = loaded_controller(7).await;

    assert!(controller.choose_edit_target(EditTarget::Content).is_err());
    assert!(controller.dismiss_edit().is_err());

    controller.request_edit().unwrap();
    controller.dismiss_edit().unwrap();
    assert_eq!(controller.edit_state(), EditRouterState::Idle);

    let mut loading = DiaryController::new(Arc::new(ScriptedClient::new()), "42", None);
    assert!(loading.request_edit().is_err());
    assert_eq!(loading.edit_state(), EditRouterState::Idle);
}

// ── Analyze and back ──

#[tokio::test]
async fn test_analyze_hands_off_record_emotion() {
    let (controller, client) = loaded_controller(3).await;
    let calls = client.requests().len();

    let nav = controller.analyze().unwrap();

    assert_eq!(
        nav,
        NavigationRequest::Navigate(Route::DailyAnalyze {
            diary_id: "42".to_string(),
            emotion_id: 7,
        })
    );
    assert_eq!(client.requests().len(), calls);
}

#[tokio::test]
async fn test_failed_view_offers_only_back() {
    let client = Arc::new(ScriptedClient::new().respond(ApiResponse::with_error(404, "not found")));
    let mut controller = DiaryController::new(client, "42", None);
    controller.reload().await;

    assert!(controller.analyze().is_err());
    assert!(controller.request_edit().is_err());
    assert!(controller.request_publish().is_err());
    assert_eq!(controller.go_back(), NavigationRequest::Back);
}
