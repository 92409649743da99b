use super::RenderContext;
use crate::locale::Locale;

pub(super) struct Fields<'a> {
    pub main_page: &'a str,
    pub subpages: &'a str,
    pub focus: &'a str,
}

pub(super) fn render(ctx: &RenderContext<'_>, fields: &Fields<'_>) -> String {
    let Fields {
        main_page,
        subpages,
        focus,
    } = fields;
    let wiki = ctx.wiki_name;
    let server = &ctx.wiki_server;
    let tools = &ctx.tool_hint;

    match ctx.locale {
        Locale::En => format!(
            r"
You are collecting design requirements from {wiki}.
Read the pages below using **only the {server}** tools (e.g. {tools}).
Do not use any other network access and do not request new authentication.

# Input
- Main page: {main_page}
- Subpages: {subpages}
- Focus: {focus}

# Steps
1. Resolve the main page (URL or title) with the search tool, then fetch its full body.
2. Fetch each listed subpage the same way. Follow links to child pages only when the design refers to them.
3. Extract requirements as short, checkable statements. Number them R1, R2, ... and record the page and section each came from.
4. When a focus is given, extract only the requirements related to it.
5. Record ambiguous or contradictory wording as open questions instead of guessing.

# Output
1) Requirement list: id | requirement | source page / section
2) Glossary of domain terms used by the requirements
3) Open questions
"
        ),
        Locale::Ja => format!(
            r"
あなたは {wiki} から設計要求を収集する担当です。
**{server}**のツールのみ（例: {tools}）を使って以下のページを読んでください。
それ以外のネットワークアクセスや新規認証要求はしない。

# 入力
- メインページ: {main_page}
- サブページ: {subpages}
- 注目範囲: {focus}

# 手順
1. メインページ（URLまたはタイトル）を検索ツールで特定し、本文全体を取得する。
2. サブページも同様に取得する。子ページへのリンクは設計書が参照している場合のみ辿る。
3. 要求を短く検証可能な文として抽出し、R1, R2, ... と採番して出典ページ・セクションを記録する。
4. 注目範囲が指定されている場合は、それに関係する要求のみ抽出する。
5. 曖昧・矛盾する記述は推測せず、未解決事項として記録する。

# 出力
1) 要求一覧: ID | 要求 | 出典ページ / セクション
2) 要求に出てくる用語集
3) 未解決事項
"
        ),
    }
}
