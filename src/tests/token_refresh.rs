#[cfg(test)]
mod test {

    use chrono::Utc;
    use httpmock::prelude::*;

    use crate::auth::token::Token;
    use crate::error::TokenError;
    use crate::model::Model;
    use crate::tests::common::{init_logging, mock_options, mock_token, now, TOKEN_PATH};

    #[test]
    fn token_expiry_boundary() {
        let now = Utc::now().timestamp();
        assert!(Token::new("t".into(), now - 1).expired());
        assert!(Token::new("t".into(), now).expired());
        assert!(!Token::new("t".into(), now + 5).expired());
    }

    #[tokio::test]
    async fn valid_token_check_is_a_no_op() {
        let server = MockServer::start_async().await;
        let mock = mock_token(&server, "still-valid", now() + 3600).await;

        let mut model = Model::new(mock_options(&server)).await.unwrap();
        model.check_and_refresh_token().await.unwrap();
        model.check_and_refresh_token().await.unwrap();

        // one construction-time call, zero refresh calls
        assert_eq!(mock.hits_async().await, 1);
        assert_eq!(model.token().value, "still-valid");
    }

    #[tokio::test]
    async fn expired_token_triggers_exactly_one_refresh() -> anyhow::Result<()> {
        init_logging();
        let server = MockServer::start_async().await;
        let mut stale = mock_token(&server, "stale", now() - 1).await;

        let mut model = Model::new(mock_options(&server)).await?;
        assert!(model.token().expired());
        assert_eq!(stale.hits_async().await, 1);
        let old_expiry = model.token().expires_at;
        stale.delete_async().await;

        let fresh = mock_token(&server, "fresh", now() + 3600).await;
        model.check_and_refresh_token().await?;

        assert_eq!(fresh.hits_async().await, 1);
        assert_eq!(model.token().value, "fresh");
        assert!(model.token().expires_at > old_expiry);

        // second check with the now-valid token adds no issuer call
        model.check_and_refresh_token().await?;
        assert_eq!(fresh.hits_async().await, 1);
        Ok(())
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_token() {
        let server = MockServer::start_async().await;
        let mut ok = mock_token(&server, "keep-me", now() + 3600).await;

        let mut model = Model::new(mock_options(&server)).await.unwrap();
        ok.delete_async().await;

        let broken = server
            .mock_async(|when, then| {
                when.method(POST).path(TOKEN_PATH);
                then.status(503).body("unavailable");
            })
            .await;

        let err = model.refresh_token().await.err().expect("refresh must fail");
        assert!(matches!(err, TokenError::Status(status) if status.as_u16() == 503));
        assert_eq!(broken.hits_async().await, 1);

        // previous token untouched, no partial-success state
        assert_eq!(model.token().value, "keep-me");
    }
}
