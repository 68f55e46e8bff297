//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパーを提供します。
#![cfg(test)]
#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// 一時ディレクトリ上に作成する翻訳ファイルツリー
///
/// ドロップ時にディレクトリごと削除される
pub(crate) struct TranslationTree {
    /// ツリーのルート
    dir: TempDir,
}

impl TranslationTree {
    /// 空のツリーを作成する
    pub(crate) fn new() -> Self {
        Self { dir: TempDir::new().unwrap() }
    }

    /// ファイルを追加する（親ディレクトリも作成）
    ///
    /// # Arguments
    /// * `relative_path` - ルートからの相対パス（例: "en/common.json"）
    /// * `content` - ファイルの内容
    pub(crate) fn file(self, relative_path: &str, content: &str) -> Self {
        self.write(relative_path, content);
        self
    }

    /// 空のディレクトリを追加する
    pub(crate) fn dir(self, relative_path: &str) -> Self {
        fs::create_dir_all(self.dir.path().join(relative_path)).unwrap();
        self
    }

    /// ファイルを書き込む（既存ファイルは上書き）
    pub(crate) fn write(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// ツリーのルートパス
    pub(crate) fn path(&self) -> &Path {
        self.dir.path()
    }
}
