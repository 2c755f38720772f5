// ABOUTME: Integration tests for view routing and the discovery flows
// ABOUTME: Realtime, shopping and golden keyword flows with per-flow failure isolation

mod common;

use common::{golden, network_error, shopping_trend, trending, Harness, ScriptedApi, DEFAULT_SEED};
use keyscope_core::View;
use keyscope_tui::api::ApiError;
use keyscope_tui::controllers::{AnalysisOutcome, FlowOutcome};
use keyscope_tui::notifications::Severity;
use keyscope_tui::state::{ControlState, Panel};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::time::Duration;
use tokio::time::sleep;

#[tokio::test(start_paused = true)]
async fn test_golden_keywords_render_best_score_first() {
    let api = ScriptedApi::new();
    api.script_gold(
        DEFAULT_SEED,
        0,
        Ok(vec![golden("low", 3.1), golden("high", 9.0), golden("mid", 5.5)]),
    );
    let harness = Harness::new(api.clone());

    assert_eq!(harness.discovery().discover_gold().await, FlowOutcome::Rendered(3));

    let state = harness.state.read().await;
    let scores: Vec<f64> = state.gold.rows().iter().map(|k| k.score).collect();
    assert_eq!(scores, vec![9.0, 5.5, 3.1]);
    // Ranks are shown as delivered, not recomputed after sorting
    assert!(state.gold.rows().iter().all(|k| k.rank_label() == "-"));
    assert_eq!(state.gold_control, ControlState::Ready);
}

#[tokio::test(start_paused = true)]
async fn test_overlapping_gold_discoveries_keep_control_busy_until_newest_finishes() {
    let api = ScriptedApi::new();
    api.script_gold("first", 100, Ok(vec![golden("from first", 4.0)]));
    api.script_gold("second", 100, Ok(vec![golden("from second", 7.0)]));
    let harness = Harness::new(api.clone());

    harness.state.write().await.set_keyword_input("first");
    let discovery = harness.discovery().clone();
    let first = tokio::spawn(async move { discovery.discover_gold().await });
    sleep(Duration::from_millis(50)).await;

    harness.state.write().await.set_keyword_input("second");
    let discovery = harness.discovery().clone();
    let second = tokio::spawn(async move { discovery.discover_gold().await });

    assert_eq!(first.await.unwrap(), FlowOutcome::Superseded);
    {
        let state = harness.state.read().await;
        assert_eq!(state.gold_control, ControlState::Busy);
        assert!(state.gold.is_loading());
    }

    assert_eq!(second.await.unwrap(), FlowOutcome::Rendered(1));
    let state = harness.state.read().await;
    assert_eq!(state.gold_control, ControlState::Ready);
    assert_eq!(state.gold.rows()[0].keyword, "from second");
}

#[rstest]
#[case("", DEFAULT_SEED)]
#[case("   ", DEFAULT_SEED)]
#[case(" 캠핑 ", "캠핑")]
#[tokio::test(start_paused = true)]
async fn test_gold_seed_comes_from_input_or_default(#[case] typed: &str, #[case] expected_seed: &str) {
    let api = ScriptedApi::new();
    let harness = Harness::new(api.clone());
    harness.state.write().await.set_keyword_input(typed);

    assert_eq!(harness.discovery().discover_gold().await, FlowOutcome::Empty);
    assert_eq!(api.calls(), vec![format!("gold:{expected_seed}")]);
}

#[tokio::test(start_paused = true)]
async fn test_gold_control_busy_during_discovery_and_released_on_failure() {
    let api = ScriptedApi::new();
    api.script_gold(DEFAULT_SEED, 300, Err(network_error()));
    let harness = Harness::new(api.clone());

    let discovery = harness.discovery().clone();
    let task = tokio::spawn(async move { discovery.discover_gold().await });
    sleep(Duration::from_millis(10)).await;
    {
        let state = harness.state.read().await;
        assert_eq!(state.gold_control, ControlState::Busy);
        assert!(state.gold.is_loading());
    }

    assert!(matches!(task.await.unwrap(), FlowOutcome::Failed(_)));
    let state = harness.state.read().await;
    assert_eq!(state.gold_control, ControlState::Ready);
    assert!(matches!(state.gold, Panel::Failed(ref m) if m.starts_with("Analysis failed")));
}

#[tokio::test(start_paused = true)]
async fn test_realtime_success_reveals_sponsored_region() {
    let api = ScriptedApi::new();
    api.script_realtime(0, Ok(vec![trending(1, "날씨"), trending(2, "환율")]));
    let harness = Harness::new(api.clone());

    assert_eq!(harness.discovery().load_realtime().await, FlowOutcome::Rendered(2));
    let state = harness.state.read().await;
    assert_eq!(state.realtime.rows()[1].keyword, "환율");
    assert!(state.sponsored_visible());
}

#[tokio::test(start_paused = true)]
async fn test_failed_flow_is_isolated_from_other_flows() {
    let api = ScriptedApi::new();
    api.script_realtime(50, Err(network_error()));
    api.script_gold(DEFAULT_SEED, 100, Ok(vec![golden("ok", 1.0)]));
    let harness = Harness::new(api.clone());

    let realtime = {
        let discovery = harness.discovery().clone();
        tokio::spawn(async move { discovery.load_realtime().await })
    };
    let gold = harness.discovery().discover_gold().await;

    assert!(matches!(realtime.await.unwrap(), FlowOutcome::Failed(_)));
    assert_eq!(gold, FlowOutcome::Rendered(1));

    let state = harness.state.read().await;
    assert_eq!(state.realtime, Panel::Failed("An error occurred.".to_string()));
    assert_eq!(state.gold.rows().len(), 1);
    assert!(!state.sponsored_visible());
    drop(state);
    // Transport failures stay inline
    assert!(harness.messages().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_application_error_in_flow_is_notified() {
    let api = ScriptedApi::new();
    api.script_realtime(0, Err(ApiError::application("trend source unavailable")));
    let harness = Harness::new(api.clone());

    assert!(matches!(harness.discovery().load_realtime().await, FlowOutcome::Failed(_)));
    assert_eq!(
        harness.messages(),
        vec![(Severity::Error, "trend source unavailable".to_string())]
    );
}

#[tokio::test(start_paused = true)]
async fn test_shopping_refresh_requires_arming() {
    let api = ScriptedApi::new();
    api.script_shopping("50000002", 0, Ok(vec![shopping_trend(1, "선크림")]));
    let harness = Harness::new(api.clone());

    assert_eq!(harness.discovery().load_shopping().await, FlowOutcome::Skipped);
    assert!(api.calls().is_empty());

    assert!(harness.views.activate(View::Shopping).await.is_none());
    harness.discovery().cycle_category(true).await;
    let category = harness.discovery().cycle_category(true).await;
    assert_eq!(category.id, "50000002");

    assert_eq!(harness.discovery().load_shopping().await, FlowOutcome::Rendered(1));
    assert_eq!(api.calls(), vec!["shopping:50000002".to_string()]);
    assert!(harness.state.read().await.sponsored_visible());
}

#[tokio::test(start_paused = true)]
async fn test_empty_shopping_trends_show_placeholder() {
    let api = ScriptedApi::new();
    let harness = Harness::new(api.clone());
    harness.discovery().arm_shopping().await;

    assert_eq!(harness.discovery().load_shopping().await, FlowOutcome::Empty);
    let state = harness.state.read().await;
    assert_eq!(state.shopping, Panel::Empty("No data.".to_string()));
    assert!(!state.sponsored_visible());
}

#[tokio::test(start_paused = true)]
async fn test_activating_views_triggers_default_loads() {
    let api = ScriptedApi::new();
    let harness = Harness::new(api.clone());

    assert!(harness.views.activate(View::Dashboard).await.is_none());
    harness.views.activate(View::Realtime).await.expect("realtime loads").await.unwrap();
    // Re-activating repeats the load
    harness.views.activate(View::Realtime).await.expect("realtime loads").await.unwrap();
    harness.views.activate(View::Gold).await.expect("gold loads").await.unwrap();

    assert_eq!(api.count("realtime"), 2);
    assert_eq!(api.count("gold"), 1);
    assert_eq!(harness.views.active_view().await, View::Gold);
}

#[tokio::test(start_paused = true)]
async fn test_unknown_view_name_is_rejected() {
    let harness = Harness::new(ScriptedApi::new());

    let err = harness.views.activate_by_name("settings").await.unwrap_err();
    assert_eq!(err.to_string(), "Unknown view: settings");
    assert_eq!(harness.views.active_view().await, View::Dashboard);

    assert!(harness.views.activate_by_name("shopping").await.unwrap().is_none());
    assert_eq!(harness.views.active_view().await, View::Shopping);
}

#[tokio::test(start_paused = true)]
async fn test_row_keyword_is_analyzed_on_dashboard() {
    let api = ScriptedApi::new();
    let harness = Harness::new(api.clone());
    harness.views.activate(View::Shopping).await;

    let analysis = harness
        .discovery()
        .analyze_row_keyword("선크림", &harness.views)
        .await;
    assert_eq!(harness.views.active_view().await, View::Dashboard);

    let outcome = analysis.await.unwrap();
    assert!(matches!(outcome, AnalysisOutcome::Completed { ref keyword, .. } if keyword == "선크림"));
    let state = harness.state.read().await;
    assert_eq!(state.keyword_input.value(), "선크림");
    assert_eq!(state.current_keyword(), Some("선크림"));
}
