use serde::{Deserialize, Serialize};
use std::fmt;

use super::BookId;

/// ジャンル
///
/// 固定の値集合。未知の値は受け付けない（DB側もCHECK制約で同じ集合に制限）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Education,
    Fantasy,
    Fiction,
    Horror,
    Romance,
    Thriller,
}

impl Genre {
    /// 全ジャンル
    pub const ALL: [Genre; 6] = [
        Genre::Education,
        Genre::Fantasy,
        Genre::Fiction,
        Genre::Horror,
        Genre::Romance,
        Genre::Thriller,
    ];

    /// 文字列表現を取得する（永続化とJSONで共通）
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Education => "Education",
            Genre::Fantasy => "Fantasy",
            Genre::Fiction => "Fiction",
            Genre::Horror => "Horror",
            Genre::Romance => "Romance",
            Genre::Thriller => "Thriller",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Genre {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .into_iter()
            .find(|genre| genre.as_str() == s)
            .ok_or_else(|| format!("Invalid genre: {}", s))
    }
}

/// 書籍エンティティ
///
/// `id`が`None`の書籍は未永続化。ストアへの`save`で採番される。
/// (title, author)の組は永続化された書籍の間で一意。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: Option<BookId>,
    pub title: String,
    pub description: Option<String>,
    pub author: String,
    pub genre: Genre,
}

impl Book {
    /// 未永続化の書籍を作成する
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        author: impl Into<String>,
        genre: Genre,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            description,
            author: author.into(),
            genre,
        }
    }

    /// IDを付与した書籍を返す
    pub fn with_id(self, id: BookId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    /// IDを除いた書籍を返す
    pub fn without_id(self) -> Self {
        Self { id: None, ..self }
    }

    /// 同じ(title, author)の組を持つか
    pub fn has_same_identity(&self, title: &str, author: &str) -> bool {
        self.title == title && self.author == author
    }
}
