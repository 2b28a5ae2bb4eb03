//! プロファイルレジストリ（状態マシン）
//!
//! `profiles.json` の読み書きを状態マシンパターンで管理する。
//!
//! ```text
//!   Idle ──load()──▶ Loaded ──add()/remove()──▶ Modified ──save()──▶ Idle
//! ```
//!
//! ファイルが存在しない場合はサンプルの2件（Marie, Pierre）で初期化する。

use super::model::{recommended_for, Goals, NewProfile, Profile, Sex};
use crate::error::{NutriError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const PROFILES_FILE: &str = "profiles.json";

/// profiles.json のルート構造
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProfilesFile {
    profiles: Vec<Profile>,
}

impl Default for ProfilesFile {
    fn default() -> Self {
        Self {
            profiles: seed_profiles(),
        }
    }
}

fn seed_profiles() -> Vec<Profile> {
    vec![
        Profile {
            id: "1".to_string(),
            name: "Marie".to_string(),
            sex: Sex::Femme,
            poids_kg: 65.0,
            goals: Goals {
                omega_3: 1500.0,
                vitamine_d: 15.0,
                magnesium: 400.0,
                fer: 18.0,
            },
            recommended: recommended_for(Sex::Femme),
            created_at: None,
        },
        Profile {
            id: "2".to_string(),
            name: "Pierre".to_string(),
            sex: Sex::Homme,
            poids_kg: 80.0,
            goals: Goals {
                omega_3: 2000.0,
                vitamine_d: 20.0,
                magnesium: 420.0,
                fer: 10.0,
            },
            recommended: recommended_for(Sex::Homme),
            created_at: None,
        },
    ]
}

/// 削除操作の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveResult {
    Removed,
    NotFound,
}

/// 状態マシンの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Loaded,
    Modified,
}

/// プロファイルレジストリ
pub struct ProfileRegistry {
    path: PathBuf,
    state: State,
    file: Option<ProfilesFile>,
}

impl ProfileRegistry {
    /// データディレクトリ配下の profiles.json を使う
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::with_path(data_dir.join(PROFILES_FILE))
    }

    /// カスタムパスで作成
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            state: State::Idle,
            file: None,
        }
    }

    /// 読み込み（Idle → Loaded）
    fn load(&mut self) -> Result<&mut ProfilesFile> {
        let file = match fs::read_to_string(&self.path) {
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                NutriError::Config(format!("Failed to parse {}: {}", PROFILES_FILE, e))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("{} not found, using seed profiles", self.path.display());
                ProfilesFile::default()
            }
            Err(e) => return Err(NutriError::Io(e)),
        };

        self.state = State::Loaded;
        Ok(self.file.insert(file))
    }

    fn loaded(&mut self) -> Result<&mut ProfilesFile> {
        if self.state == State::Idle || self.file.is_none() {
            return self.load();
        }
        self.file
            .as_mut()
            .ok_or_else(|| NutriError::Config("No profiles loaded".to_string()))
    }

    /// 保存（Modified → Idle）
    fn save(&mut self) -> Result<()> {
        let file = self
            .file
            .as_ref()
            .ok_or_else(|| NutriError::Config("No profiles loaded".to_string()))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // 同じディレクトリに一時ファイルを作成してアトミックに置換
        let parent = self.path.parent().unwrap_or(Path::new("."));
        let mut temp_file = NamedTempFile::new_in(parent)?;
        let content = serde_json::to_string_pretty(file)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.persist(&self.path).map_err(|e| {
            NutriError::Config(format!("Failed to persist {}: {}", PROFILES_FILE, e))
        })?;

        log::info!("saved profiles to {}", self.path.display());
        self.state = State::Idle;
        Ok(())
    }

    /// プロファイル一覧
    pub fn list(&mut self) -> Result<Vec<Profile>> {
        Ok(self.loaded()?.profiles.clone())
    }

    /// IDで取得
    pub fn get(&mut self, id: &str) -> Result<Profile> {
        self.loaded()?
            .profiles
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| NutriError::ProfileNotFound(id.to_string()))
    }

    /// 追加（load → modify → save）。割り当てたIDのプロファイルを返す
    pub fn add(&mut self, input: NewProfile) -> Result<Profile> {
        let file = self.loaded()?;
        let profile = input.into_profile(next_id(&file.profiles)?)?;
        file.profiles.push(profile.clone());
        self.state = State::Modified;

        self.save()?;
        Ok(profile)
    }

    /// 削除（load → modify → save）
    pub fn remove(&mut self, id: &str) -> Result<RemoveResult> {
        let file = self.loaded()?;
        let original_len = file.profiles.len();
        file.profiles.retain(|p| p.id != id);

        if file.profiles.len() == original_len {
            return Ok(RemoveResult::NotFound);
        }

        self.state = State::Modified;
        self.save()?;
        Ok(RemoveResult::Removed)
    }

    #[cfg(test)]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 現在の状態を取得（デバッグ用）
    #[cfg(test)]
    pub fn current_state(&self) -> &'static str {
        match self.state {
            State::Idle => "Idle",
            State::Loaded => "Loaded",
            State::Modified => "Modified",
        }
    }
}

/// 数値IDの最大値 + 1（数値でないIDは無視）
fn next_id(profiles: &[Profile]) -> Result<String> {
    let max = profiles
        .iter()
        .filter_map(|p| p.id.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    max.checked_add(1)
        .map(|id| id.to_string())
        .ok_or_else(|| NutriError::Validation(format!("No profile id left after {}", max)))
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
