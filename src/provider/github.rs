//! GitHub provider implementation.

use async_trait::async_trait;
use log::debug;
#[cfg(test)]
use reqwest::Client;

use crate::http::{FetchError, HttpClient};

use super::{Contributor, Provider, Release, ReleaseAsset, RepoId};

/// GitHub API response types (internal).
mod api {
    use serde::Deserialize;

    #[derive(Deserialize, Debug)]
    pub struct Release {
        pub tag_name: String,
        pub name: Option<String>,
        pub published_at: String,
        pub body: Option<String>,
        pub html_url: String,
        pub assets: Vec<Asset>,
    }

    #[derive(Deserialize, Debug)]
    pub struct Asset {
        pub name: String,
        pub size: u64,
        pub browser_download_url: String,
    }

    #[derive(Deserialize, Debug)]
    pub struct Contributor {
        pub login: String,
        pub avatar_url: String,
        pub html_url: String,
        pub contributions: u64,
    }
}

/// GitHub provider bound to a single repository.
pub struct GitHubProvider {
    http_client: HttpClient,
    api_url: String,
    repo: RepoId,
}

impl GitHubProvider {
    /// Create a provider against a custom API URL.
    /// Used primarily for testing.
    #[cfg(test)]
    pub fn with_api_url(client: Client, api_url: &str, repo: RepoId) -> Self {
        Self::from_http_client(HttpClient::new(client), api_url, repo)
    }

    /// Create from an existing HttpClient.
    pub fn from_http_client(http_client: HttpClient, api_url: &str, repo: RepoId) -> Self {
        Self {
            http_client,
            api_url: api_url.trim_end_matches('/').to_string(),
            repo,
        }
    }

    #[cfg(test)]
    pub(crate) fn api_url(&self) -> &str {
        &self.api_url
    }

    fn repo_url(&self) -> String {
        format!("{}/repos/{}/{}", self.api_url, self.repo.owner, self.repo.repo)
    }
}

#[async_trait]
impl Provider for GitHubProvider {
    fn repo(&self) -> &RepoId {
        &self.repo
    }

    #[tracing::instrument(skip(self))]
    async fn latest_release(&self) -> Result<Release, FetchError> {
        let url = format!("{}/releases/latest", self.repo_url());
        debug!("Fetching latest release from {}...", url);

        let release: api::Release = self.http_client.get_json(&url).await?;
        Ok(release.into())
    }

    #[tracing::instrument(skip(self))]
    async fn contributors(&self, limit: u32) -> Result<Vec<Contributor>, FetchError> {
        let url = format!("{}/contributors", self.repo_url());
        debug!("Fetching up to {} contributors from {}...", limit, url);

        let per_page = limit.to_string();
        let contributors: Vec<api::Contributor> = self
            .http_client
            .get_json_with_query(&url, &[("per_page", per_page.as_str())])
            .await?;
        Ok(contributors.into_iter().map(|c| c.into()).collect())
    }
}

impl From<api::Release> for Release {
    fn from(r: api::Release) -> Self {
        Release {
            tag_name: r.tag_name,
            name: r.name,
            published_at: r.published_at,
            body: r.body,
            html_url: r.html_url,
            assets: r.assets.into_iter().map(|a| a.into()).collect(),
        }
    }
}

impl From<api::Asset> for ReleaseAsset {
    fn from(a: api::Asset) -> Self {
        ReleaseAsset {
            name: a.name,
            size: a.size,
            download_url: a.browser_download_url,
        }
    }
}

impl From<api::Contributor> for Contributor {
    fn from(c: api::Contributor) -> Self {
        Contributor {
            login: c.login,
            avatar_url: c.avatar_url,
            html_url: c.html_url,
            contributions: c.contributions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    const RELEASE_BODY: &str = r#"{
        "tag_name": "v1.2.0",
        "name": "DDEV Manager 1.2.0",
        "published_at": "2024-03-04T12:30:00Z",
        "body": "Bug fixes",
        "html_url": "https://github.com/owner/repo/releases/tag/v1.2.0",
        "prerelease": false,
        "assets": [
            {
                "name": "DDEV.Manager_1.2.0_universal.dmg",
                "size": 15728640,
                "browser_download_url": "https://example.com/mac.dmg",
                "content_type": "application/octet-stream"
            }
        ]
    }"#;

    fn provider(url: &str) -> GitHubProvider {
        GitHubProvider::with_api_url(Client::new(), url, RepoId::new("owner", "repo"))
    }

    #[tokio::test]
    async fn test_latest_release() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/owner/repo/releases/latest")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(RELEASE_BODY)
            .create_async()
            .await;

        let release = provider(&server.url()).latest_release().await.unwrap();

        mock.assert_async().await;
        assert_eq!(release.tag_name, "v1.2.0");
        assert_eq!(release.name.as_deref(), Some("DDEV Manager 1.2.0"));
        assert_eq!(release.published_at, "2024-03-04T12:30:00Z");
        assert_eq!(release.body.as_deref(), Some("Bug fixes"));
        assert_eq!(release.assets.len(), 1);
        assert_eq!(release.assets[0].download_url, "https://example.com/mac.dmg");
        assert_eq!(release.assets[0].size, 15728640);
    }

    #[tokio::test]
    async fn test_latest_release_null_name_and_body() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock("GET", "/repos/owner/repo/releases/latest")
            .with_status(200)
            .with_body(
                r#"{
                    "tag_name": "v0.1.0",
                    "name": null,
                    "published_at": "2024-01-01T00:00:00Z",
                    "body": null,
                    "html_url": "https://example.com",
                    "assets": []
                }"#,
            )
            .create_async()
            .await;

        let release = provider(&server.url()).latest_release().await.unwrap();

        assert_eq!(release.name, None);
        assert_eq!(release.body, None);
        assert!(release.assets.is_empty());
    }

    #[tokio::test]
    async fn test_latest_release_not_found() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/owner/repo/releases/latest")
            .with_status(404)
            .create_async()
            .await;

        let result = provider(&server.url()).latest_release().await;

        mock.assert_async().await;
        assert!(matches!(result, Err(FetchError::Status(StatusCode::NOT_FOUND))));
    }

    #[tokio::test]
    async fn test_request_headers() {
        let mut server = mockito::Server::new_async().await;
        let client = crate::config::SiteConfig::default().build_client().unwrap();

        let mock = server
            .mock("GET", "/repos/owner/repo/releases/latest")
            .match_header("accept", "application/vnd.github.v3+json")
            .match_header("user-agent", "DDEV-Manager-Website")
            .match_header("authorization", mockito::Matcher::Missing)
            .with_status(200)
            .with_body(RELEASE_BODY)
            .create_async()
            .await;

        let provider = GitHubProvider::from_http_client(
            HttpClient::new(client),
            &server.url(),
            RepoId::new("owner", "repo"),
        );
        provider.latest_release().await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_contributors() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/owner/repo/contributors?per_page=5")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[
                    {"login": "alice", "avatar_url": "https://a/1", "html_url": "https://gh/alice", "contributions": 120, "type": "User"},
                    {"login": "bob", "avatar_url": "https://a/2", "html_url": "https://gh/bob", "contributions": 7, "type": "User"}
                ]"#,
            )
            .create_async()
            .await;

        let contributors = provider(&server.url()).contributors(5).await.unwrap();

        mock.assert_async().await;
        assert_eq!(contributors.len(), 2);
        assert_eq!(contributors[0].login, "alice");
        assert_eq!(contributors[0].contributions, 120);
        assert_eq!(contributors[1].login, "bob");
        assert_eq!(contributors[1].html_url, "https://gh/bob");
    }

    #[tokio::test]
    async fn test_contributors_keeps_upstream_order() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock("GET", "/repos/owner/repo/contributors?per_page=20")
            .with_status(200)
            .with_body(
                r#"[
                    {"login": "low", "avatar_url": "", "html_url": "", "contributions": 1},
                    {"login": "high", "avatar_url": "", "html_url": "", "contributions": 99}
                ]"#,
            )
            .create_async()
            .await;

        let contributors = provider(&server.url()).contributors(20).await.unwrap();

        let logins: Vec<_> = contributors.iter().map(|c| c.login.as_str()).collect();
        assert_eq!(logins, vec!["low", "high"]);
    }

    #[tokio::test]
    async fn test_contributors_server_error() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock("GET", "/repos/owner/repo/contributors?per_page=20")
            .with_status(500)
            .create_async()
            .await;

        let result = provider(&server.url()).contributors(20).await;

        assert!(matches!(
            result,
            Err(FetchError::Status(StatusCode::INTERNAL_SERVER_ERROR))
        ));
    }

    #[test]
    fn test_api_url_trailing_slash_trimmed() {
        let provider = provider("https://custom.api/");
        assert_eq!(provider.api_url(), "https://custom.api");
        assert_eq!(provider.repo_url(), "https://custom.api/repos/owner/repo");
    }

    #[test]
    fn test_release_conversion() {
        let api_release = api::Release {
            tag_name: "v1.0.0".into(),
            name: Some("Release 1.0".into()),
            published_at: "2024-01-01T00:00:00Z".into(),
            body: None,
            html_url: "https://example.com/release".into(),
            assets: vec![api::Asset {
                name: "App_1.0.0_amd64.deb".into(),
                size: 1024,
                browser_download_url: "https://example.com/asset".into(),
            }],
        };

        let release: Release = api_release.into();
        assert_eq!(release.tag_name, "v1.0.0");
        assert_eq!(release.name, Some("Release 1.0".into()));
        assert_eq!(release.assets.len(), 1);
        assert_eq!(release.assets[0].name, "App_1.0.0_amd64.deb");
        assert_eq!(release.assets[0].download_url, "https://example.com/asset");
    }
}
