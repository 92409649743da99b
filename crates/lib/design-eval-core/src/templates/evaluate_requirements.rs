use super::RenderContext;
use crate::locale::Locale;

pub(super) struct Fields<'a> {
    pub requirements: Option<&'a str>,
    pub facts: Option<&'a str>,
    pub project_root: &'a str,
    pub main_files: &'a str,
}

const EN_REQUIREMENTS_FALLBACK: &str = "(use the requirement list from the fetch_design_doc step)";
const EN_FACTS_FALLBACK: &str = "(use the dependency tree and facts from the scan_codebase step)";
const JA_REQUIREMENTS_FALLBACK: &str = "(fetch_design_doc の結果の要求一覧を使う)";
const JA_FACTS_FALLBACK: &str = "(scan_codebase の結果の依存ツリーと実装事実を使う)";

pub(super) fn render(ctx: &RenderContext<'_>, fields: &Fields<'_>) -> String {
    let project_root = fields.project_root;
    let main_files = fields.main_files;

    match ctx.locale {
        Locale::En => {
            let requirements = fields.requirements.unwrap_or(EN_REQUIREMENTS_FALLBACK);
            let facts = fields.facts.unwrap_or(EN_FACTS_FALLBACK);
            format!(
                r"
You are judging whether an implementation satisfies its design requirements.
Work from the requirements and implementation facts below. When evidence is missing, read local files with the client's file tools (glob/read).
Do not call external web pages or APIs.

# Input
- Requirements: {requirements}
- Implementation facts: {facts}
- Project root: {project_root}
- Key files: {main_files}

# Verdict rules
- pass: every part of the requirement is implemented and you can cite the code.
- partial: only part of it is implemented, or it is implemented with a deviation.
- fail: no implementation was found, or the implementation contradicts the requirement.
- Cite file names and line ranges for every verdict. Do not assume behavior you have not read.

# Output
1) Table: requirement id | verdict (pass / partial / fail) | evidence (file:lines) | note
2) Overall verdict: pass / partial / fail
3) Fixes with the smallest possible diff for each partial or fail item
"
            )
        }
        Locale::Ja => {
            let requirements = fields.requirements.unwrap_or(JA_REQUIREMENTS_FALLBACK);
            let facts = fields.facts.unwrap_or(JA_FACTS_FALLBACK);
            format!(
                r"
あなたは実装が設計要求を満たしているかを判定する担当です。
以下の要求と実装事実をもとに判定する。根拠が足りない場合はクライアントのファイル系ツール（glob/read）でローカルファイルを読む。
外部Web/APIの直接呼び出しはしない。

# 入力
- 要求: {requirements}
- 実装事実: {facts}
- プロジェクトルート: {project_root}
- 重要ファイル: {main_files}

# 判定基準
- pass: 要求のすべてが実装されており、該当コードを示せる。
- partial: 一部のみ実装、または差異のある実装。
- fail: 実装が見つからない、または要求と矛盾する。
- すべての判定に根拠となるファイル名・行範囲を示す。読んでいない挙動を推測しない。

# 出力
1) 表: 要求ID | 判定 (pass / partial / fail) | 根拠 (ファイル:行) | 備考
2) 総合判定: pass / partial / fail
3) partial / fail の各項目に対する最小差分での修正ポイント
"
            )
        }
    }
}
