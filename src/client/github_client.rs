use async_trait::async_trait;
use regex::Regex;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, LINK, USER_AGENT};
use serde::Deserialize;

use crate::constants::{GITHUB_API_URL, PER_PAGE, USER_AGENT as AGENT};
use crate::error::{IssueError, IssueResult};
use crate::filtering::StructuredFilter;
use crate::logging::log_debug;
use crate::models::*;

use super::tracker::IssueTracker;

lazy_static::lazy_static! {
    static ref NEXT_LINK: Regex = Regex::new(r#"<([^>]*)>\s*;\s*rel="next""#).unwrap();
    static ref PAGE_PARAM: Regex = Regex::new(r"[?&]page=(\d+)").unwrap();
}

/// REST v3 client for one GitHub project.
pub struct GitHubClient {
    client: reqwest::Client,
    api_root: String,
    project: Project,
}

#[derive(Debug, Deserialize)]
struct SearchResults {
    #[serde(default)]
    items: Vec<Issue>,
}

impl GitHubClient {
    pub fn new(token: &str, project: Project) -> IssueResult<Self> {
        Self::with_api_root(token, project, GITHUB_API_URL)
    }

    pub fn with_api_root(token: &str, project: Project, api_root: &str) -> IssueResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(AGENT));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("token {}", token))
                .map_err(|_| IssueError::TokenError("token contains invalid characters".to_string()))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            api_root: api_root.trim_end_matches('/').to_string(),
            project,
        })
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    fn repo_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/{}",
            self.api_root, self.project.owner, self.project.repo, path
        )
    }

    async fn execute<T: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> IssueResult<(T, u32)> {
        log_debug(&format!("GET {} {:?}", url, params));

        let response = self.client.get(url).query(params).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(IssueError::ApiError(format!(
                "GET {} failed with status {}: {}",
                url, status, error_text
            )));
        }

        let next_page = response
            .headers()
            .get(LINK)
            .and_then(|value| value.to_str().ok())
            .map(next_page_from_link)
            .unwrap_or(0);

        let data = response.json::<T>().await?;
        Ok((data, next_page))
    }

    async fn paged<T: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
        mut params: Vec<(&str, String)>,
        page: u32,
    ) -> IssueResult<Page<T>> {
        params.push(("page", page.to_string()));
        params.push(("per_page", PER_PAGE.to_string()));
        let (items, next_page) = self.execute::<Vec<T>>(url, &params).await?;
        Ok(Page::new(items, next_page))
    }
}

/// Extracts the page number of the `rel="next"` link, or 0 when there is none.
pub fn next_page_from_link(header: &str) -> u32 {
    NEXT_LINK
        .captures(header)
        .and_then(|link| PAGE_PARAM.captures(&link[1]).map(|page| page[1].to_string()))
        .and_then(|page| page.parse().ok())
        .unwrap_or(0)
}

#[async_trait]
impl IssueTracker for GitHubClient {
    async fn get_issue(&self, number: u64) -> IssueResult<Issue> {
        let url = self.repo_url(&format!("issues/{}", number));
        let (issue, _) = self.execute::<Issue>(&url, &[]).await?;
        Ok(issue)
    }

    async fn list_comments(&self, number: u64, page: u32) -> IssueResult<Page<Comment>> {
        let url = self.repo_url(&format!("issues/{}/comments", number));
        self.paged(&url, Vec::new(), page).await
    }

    async fn list_events(&self, number: u64, page: u32) -> IssueResult<Page<Event>> {
        let url = self.repo_url(&format!("issues/{}/events", number));
        self.paged(&url, Vec::new(), page).await
    }

    async fn list_issues(&self, filter: &StructuredFilter, page: u32) -> IssueResult<Page<Issue>> {
        let url = self.repo_url("issues");
        self.paged(&url, filter.query_params(), page).await
    }

    async fn search_issues(&self, query: &str, page: u32) -> IssueResult<Page<Issue>> {
        let url = format!("{}/search/issues", self.api_root);
        let params = vec![
            ("q", query.to_string()),
            ("page", page.to_string()),
            ("per_page", PER_PAGE.to_string()),
        ];
        let (results, next_page) = self.execute::<SearchResults>(&url, &params).await?;
        Ok(Page::new(results.items, next_page))
    }

    async fn get_commit(&self, sha: &str) -> IssueResult<Commit> {
        let url = self.repo_url(&format!("git/commits/{}", sha));
        let (commit, _) = self.execute::<Commit>(&url, &[]).await?;
        Ok(commit)
    }

    async fn list_open_milestones(&self) -> IssueResult<Vec<Milestone>> {
        let url = self.repo_url("milestones");
        let (milestones, _) = self
            .execute::<Vec<Milestone>>(&url, &[("state", "open".to_string())])
            .await?;
        Ok(milestones)
    }
}
