use serde::{Deserialize, Serialize};

pub const DEFAULT_AUTHOR: &str = "창업하는 오소리";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default = "default_author")]
    pub author: String,
    pub text: String,
}

fn default_author() -> String {
    DEFAULT_AUTHOR.to_string()
}

impl Review {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            author: default_author(),
            text: text.into(),
        }
    }

    pub fn defaults() -> Vec<Review> {
        [
            "자리잡다의 새로운 모습을 알게 되었고, 지역의 변화를 실감했어요!",
            "AI 추천이 정확해서 신뢰가 생겨요.",
            "너무 편하고 좋은 것 같아요",
            "디자인이 깔끔하고 보기 편해요.",
            "서비스 속도가 빨라서 좋아요!",
        ]
        .into_iter()
        .map(Review::new)
        .collect()
    }
}
