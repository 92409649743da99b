use super::RenderContext;
use crate::locale::Locale;

pub(super) struct Fields<'a> {
    pub main_page: &'a str,
    pub subpages: &'a str,
    pub project_root: &'a str,
    pub main_files: &'a str,
}

pub(super) fn render(ctx: &RenderContext<'_>, fields: &Fields<'_>) -> String {
    let Fields {
        main_page,
        subpages,
        project_root,
        main_files,
    } = fields;
    let wiki = ctx.wiki_name;
    let server = &ctx.wiki_server;
    let server_tools = &ctx.wiki_tools;
    let tools = &ctx.tool_hint;

    match ctx.locale {
        Locale::En => format!(
            r#"
You are the director of a design-compliance check.
Fetch the design document using **only the {server}**,
then read the local code statically and briefly judge whether it "matches the design".

# Input
- {wiki} main page: {main_page}
- Subpages: {subpages}
- Project root: {project_root}
- Key files: {main_files}

# Tool policy (strict)
- Retrieve {wiki} content only through the {server_tools} (e.g. {tools}).
- Analyze local code with the client's file tools (glob/read).
- Do not call external web pages or APIs directly, and do not request new authentication.

# Output
1) Key design requirements (bullet list)
2) Implementation verdict: pass / partial / fail (cite file names and line ranges as evidence where possible)
3) Immediate improvement proposals (fix points with the smallest possible diff)
"#
        ),
        Locale::Ja => format!(
            r"
あなたは設計遵守チェックの指揮役です。
**{server}**のみを使って設計書を取得し、
ローカルコードを静的に見て「設計どおりか」を簡潔に判定してください。

# 入力
- {wiki} メイン: {main_page}
- サブページ: {subpages}
- プロジェクトルート: {project_root}
- 重要ファイル: {main_files}

# ツール利用の方針（厳守）
- {wiki} 情報取得は {server_tools}のみ（例: {tools}）。
- ローカル解析はクライアントのファイル系ツール（glob/read）を使う。
- 外部Web/APIの直接呼び出しや新規認証要求はしない。

# 出力
1) 設計の主要要求（箇条書き）
2) 実装の判定: pass / partial / fail（根拠となるファイル名・行範囲をできる範囲で）
3) 直近の改善提案（最小差分での修正ポイント）
"
        ),
    }
}
