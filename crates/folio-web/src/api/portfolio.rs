/// Portfolio data access

use leptos::*;
use leptos::server_fn::error::NoCustomError;

use folio_common::Portfolio;

/// Fetch the portfolio loaded at server startup
#[server(GetPortfolio, "/api")]
pub async fn get_portfolio() -> Result<Portfolio, ServerFnError> {
    let portfolio = use_context::<Portfolio>()
        .ok_or_else(|| {
            ServerFnError::<NoCustomError>::ServerError("portfolio is not loaded".to_string())
        })?;

    tracing::debug!(projects = portfolio.projects.len(), "serving portfolio");
    Ok(portfolio)
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_portfolio_from_context() {
        let runtime = create_runtime();
        provide_context(Portfolio::example());

        let portfolio = get_portfolio().await.unwrap();
        assert_eq!(portfolio, Portfolio::example());

        runtime.dispose();
    }

    #[tokio::test]
    async fn test_missing_context_is_an_error() {
        let runtime = create_runtime();

        let err = get_portfolio().await.unwrap_err();
        assert!(err.to_string().contains("portfolio is not loaded"));

        runtime.dispose();
    }
}
