pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health::ok();
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn status_reply_serializes_without_id() {
        let v = serde_json::to_value(types::StatusReply::success()).unwrap();
        assert_eq!(v, serde_json::json!({"status": "success"}));
    }

    #[test]
    fn status_reply_serializes_with_id() {
        let v = serde_json::to_value(types::StatusReply::success_with_id(7)).unwrap();
        assert_eq!(v, serde_json::json!({"status": "success", "id": 7}));
    }
}
