use super::RenderContext;
use crate::locale::Locale;

pub(super) struct Fields<'a> {
    pub project_root: &'a str,
    pub entry_files: &'a str,
    pub max_depth: &'a str,
    pub exclude: &'a str,
}

pub(super) fn render(ctx: &RenderContext<'_>, fields: &Fields<'_>) -> String {
    let Fields {
        project_root,
        entry_files,
        max_depth,
        exclude,
    } = fields;

    match ctx.locale {
        Locale::En => format!(
            r"
You are mapping a local codebase by static reading only.
Use the client's file tools (glob/read). Do not execute, build, install, or modify anything.

# Input
- Project root: {project_root}
- Entry files: {entry_files}
- Maximum import depth: {max_depth}
- Excluded paths: {exclude}

# Steps
1. Start from the entry files. If none are given, glob under the project root for likely entry points (main/index/app modules, route or handler registration).
2. Read each file and record its import/require/use/include edges that resolve to files inside the project root. Ignore third-party packages and standard libraries.
3. Follow those edges breadth-first up to depth {max_depth} from the entry files. Never revisit a file and skip excluded paths.
4. For every visited file record implementation facts: exported symbols, endpoints, data models, configuration keys, validation, and error handling.

# Output
1) Dependency tree (file -> imported files) with the depth at which each file was reached
2) Implementation facts per file, with line ranges
3) Imports that could not be resolved to a file
"
        ),
        Locale::Ja => format!(
            r"
あなたはローカルのコードベースを静的に読むだけで実装を把握する担当です。
クライアントのファイル系ツール（glob/read）を使う。実行・ビルド・インストール・変更はしない。

# 入力
- プロジェクトルート: {project_root}
- 起点ファイル: {entry_files}
- import を辿る最大深さ: {max_depth}
- 除外パス: {exclude}

# 手順
1. 起点ファイルから始める。指定がなければプロジェクトルート配下を glob して入口らしいファイル（main/index/app、ルーティングやハンドラ登録）を探す。
2. 各ファイルを読み、プロジェクトルート内のファイルに解決される import/require/use/include を記録する。外部パッケージや標準ライブラリは無視する。
3. 起点ファイルから幅優先で深さ {max_depth} まで辿る。同じファイルは二度読まず、除外パスは飛ばす。
4. 訪れたファイルごとに実装上の事実を記録する: 公開シンボル、エンドポイント、データモデル、設定キー、バリデーション、エラー処理。

# 出力
1) 依存ツリー（ファイル -> import 先）と各ファイルに到達した深さ
2) ファイルごとの実装事実（行範囲つき）
3) ファイルに解決できなかった import
"
        ),
    }
}
