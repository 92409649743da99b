use std::path::PathBuf;

use design_eval_core::templates::{DesignEvalRequest, ScanCodebaseRequest};
use design_eval_core::{Locale, PromptProfile, TemplateRenderer, TemplateRequest};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join("ja-confluence.toml")
}

fn load_fixture() -> PromptProfile {
    let path = fixture_path();
    PromptProfile::load(&path).unwrap_or_else(|err| {
        let path_display = path.display();
        panic!("failed to load profile fixture at {path_display}: {err}")
    })
}

#[test]
fn fixture_profile_loads() {
    let profile = load_fixture();

    assert_eq!(profile.server_name, "design-eval-director-ja");
    assert_eq!(profile.locale, Locale::Ja);
    assert_eq!(profile.defaults.max_depth, 2);
}

#[test]
fn fixture_profile_renders_japanese_director_prompt() {
    let renderer = TemplateRenderer::new(load_fixture());
    let rendered = renderer
        .render(&TemplateRequest::ConfluenceEval(DesignEvalRequest {
            main_page: "決済設計書".to_string(),
            subpages: vec!["返金フロー".to_string()],
            project_root: None,
            main_files: Vec::new(),
        }))
        .expect("director prompt should render");

    assert!(rendered.text.contains("あなたは設計遵守チェックの指揮役です。"));
    assert!(rendered.text.contains("**Atlassian公式の Confluence MCP サーバ**のみ"));
    assert!(rendered.text.contains("- Confluence メイン: 決済設計書"));
    assert!(rendered.text.contains("- サブページ: 返金フロー"));
    assert!(rendered.text.contains("- 重要ファイル: (なし)"));
    assert!(rendered.text.contains(
        "- Confluence 情報取得は Atlassian公式の Confluence MCP ツールのみ（例: search/get_page/get_content）。"
    ));
}

#[test]
fn fixture_profile_depth_applies_to_scans() {
    let renderer = TemplateRenderer::new(load_fixture());
    let rendered = renderer
        .render(&TemplateRequest::ScanCodebase(ScanCodebaseRequest::default()))
        .expect("scan prompt should render");

    assert!(rendered.text.contains("- import を辿る最大深さ: 2"));
    assert!(rendered.text.contains("深さ 2 まで辿る"));
}
