use crate::model::{ChapterId, OpId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: ChapterId,
    pub data: String,        // Opaque input payload for the chapter
    pub fingerprint: String, // Content fingerprint of the payload
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpHead {
    pub id: OpId,
    pub desc: String,
    pub is_comment: bool,
}

/// A chapter together with its operations, in trace order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterDetail {
    pub head: Chapter,
    pub ops: Vec<OpHead>,
}

impl ChapterDetail {
    pub fn op(&self, op_id: OpId) -> Option<&OpHead> {
        self.ops.iter().find(|op| op.id == op_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chapter_list_parses() {
        let json = r#"[{"id": 0, "data": "x", "fingerprint": "abc"}]"#;
        let chapters: Vec<Chapter> = serde_json::from_str(json).unwrap();

        assert_eq!(chapters.len(), 1);
        assert_eq!(
            chapters[0],
            Chapter {
                id: 0,
                data: "x".to_string(),
                fingerprint: "abc".to_string(),
            }
        );
    }

    #[test]
    fn test_chapter_detail_parses_and_looks_up_ops() {
        let json = r#"{
            "head": {"id": 2, "data": "input", "fingerprint": "f00d"},
            "ops": [
                {"id": 0, "desc": "Pull a", "is_comment": false},
                {"id": 1, "desc": "recompute b", "is_comment": true},
                {"id": 2, "desc": "Push b", "is_comment": false}
            ]
        }"#;
        let detail: ChapterDetail = serde_json::from_str(json).unwrap();

        assert_eq!(detail.head.id, 2);
        assert_eq!(detail.ops.len(), 3);
        assert_eq!(detail.ops.iter().filter(|op| op.is_comment).count(), 1);
        assert_eq!(detail.op(1).map(|op| op.desc.as_str()), Some("recompute b"));
        assert!(detail.op(7).is_none());
    }

    #[test]
    fn test_chapter_rejects_bad_ids() {
        // Ids are non-negative integers
        for json in [
            r#"{"id": -1, "data": "x", "fingerprint": "abc"}"#,
            r#"{"id": 1.5, "data": "x", "fingerprint": "abc"}"#,
            r#"{"id": "0", "data": "x", "fingerprint": "abc"}"#,
        ] {
            assert!(serde_json::from_str::<Chapter>(json).is_err(), "{}", json);
        }
    }

    #[test]
    fn test_op_head_requires_comment_flag() {
        let json = r#"{"id": 0, "desc": "Pull a"}"#;
        assert!(serde_json::from_str::<OpHead>(json).is_err());
    }
}
