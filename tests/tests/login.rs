#[allow(unused)]
use utils::*;

#[cfg(feature = "integration")]
mod tests {
    use super::*;

    use auth_loadtest::login::{login_transaction, LoginChecks};
    use auth_loadtest::LoadProfile;
    use balter::prelude::*;
    use mock_auth::Credentials;

    #[tokio::test]
    async fn checks_pass_against_an_accepting_service() {
        init().await;
        spawn_mock("0.0.0.0:3010", Credentials::demo()).await;

        let profile = LoadProfile::with_durations(50, "1s", "10s", 5, 50).unwrap();

        let stats = login_ok_scenario()
            .tps(profile.goal_tps().into())
            .duration(profile.duration)
            .await;

        assert!(OK_CHECKS.status_is_200.passes() > 0);
        assert_eq!(OK_CHECKS.status_is_200.fails(), 0);
        assert_eq!(OK_CHECKS.token_received.fails(), 0);
        assert_eq!(
            OK_CHECKS.status_is_200.passes(),
            OK_CHECKS.token_received.passes()
        );
        assert!(stats.concurrency >= 1);
    }

    #[tokio::test]
    async fn rejected_logins_fail_both_checks_and_the_run_completes() {
        init().await;
        spawn_mock(
            "0.0.0.0:3011",
            Credentials {
                email: "someone@else.com".to_string(),
                password: "hunter2".to_string(),
            },
        )
        .await;

        let profile = LoadProfile::with_durations(50, "1s", "10s", 5, 50).unwrap();

        // Every iteration gets a 401; the run must still pace out the full
        // duration without panicking.
        let stats = login_rejected_scenario()
            .tps(profile.goal_tps().into())
            .duration(profile.duration)
            .await;

        assert!(REJECTED_CHECKS.status_is_200.fails() > 0);
        assert_eq!(REJECTED_CHECKS.status_is_200.passes(), 0);
        assert_eq!(REJECTED_CHECKS.token_received.passes(), 0);
        // No partial-pass state: both checks fail together.
        assert_eq!(
            REJECTED_CHECKS.status_is_200.fails(),
            REJECTED_CHECKS.token_received.fails()
        );
        assert!(stats.concurrency >= 1);
    }

    /* Scenario Helpers */

    static OK_CHECKS: LoginChecks = LoginChecks::new();
    static REJECTED_CHECKS: LoginChecks = LoginChecks::new();

    #[scenario]
    async fn login_ok_scenario() {
        let _ = login_transaction("http://0.0.0.0:3010/auth/login", &OK_CHECKS).await;
    }

    #[scenario]
    async fn login_rejected_scenario() {
        let _ = login_transaction("http://0.0.0.0:3011/auth/login", &REJECTED_CHECKS).await;
    }
}
