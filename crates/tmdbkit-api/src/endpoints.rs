//! Endpoint catalogue: `LocalTmdbApi` for `TmdbClient`.

use tracing::instrument;

use crate::api::LocalTmdbApi;
use crate::client::TmdbClient;
use crate::error::Result;
use crate::params::{ExternalSource, SearchParams};
use crate::request::{
    COLLECTION_APPEND, COMPANY_APPEND, MOVIE_APPEND, PERSON_APPEND, SEASON_APPEND,
    TV_SHOW_APPEND, append_to_response, path_segment,
};
use crate::types::{
    Collection, Company, Episode, FindResults, Movie, Person, Season, TvShow,
};

/// `append_to_response` for a detail request, falling back to `default`.
fn detail_query(append: Option<&[&str]>, default: &[&str]) -> Vec<(&'static str, String)> {
    append_to_response(append.unwrap_or(default))
        .into_iter()
        .collect()
}

fn page_query(page: u32) -> [(&'static str, String); 1] {
    [("page", page.to_string())]
}

fn find_query(source: ExternalSource) -> [(&'static str, String); 1] {
    [("external_source", String::from(source.as_str()))]
}

impl LocalTmdbApi for TmdbClient {
    #[instrument(skip(self, append))]
    async fn get_movie(&self, id: u64, append: Option<&[&str]>) -> Result<Movie> {
        let query = detail_query(append, MOVIE_APPEND);
        self.fetch(&format!("movie/{id}"), &query).await
    }

    #[instrument(skip(self, append))]
    async fn get_tv_show(&self, id: u64, append: Option<&[&str]>) -> Result<TvShow> {
        let query = detail_query(append, TV_SHOW_APPEND);
        self.fetch(&format!("tv/{id}"), &query).await
    }

    #[instrument(skip(self, append))]
    async fn get_season(
        &self,
        tv_id: u64,
        season_number: u32,
        append: Option<&[&str]>,
    ) -> Result<Season> {
        let query = detail_query(append, SEASON_APPEND);
        let mut season: Season = self
            .fetch(&format!("tv/{tv_id}/season/{season_number}"), &query)
            .await?;
        season.fill_tv_show_id(tv_id);
        Ok(season)
    }

    #[instrument(skip(self, append))]
    async fn get_episode(
        &self,
        tv_id: u64,
        season_number: u32,
        episode_number: u32,
        append: Option<&[&str]>,
    ) -> Result<Episode> {
        let query = detail_query(append, SEASON_APPEND);
        let path = format!("tv/{tv_id}/season/{season_number}/episode/{episode_number}");
        let mut episode: Episode = self.fetch(&path, &query).await?;
        if episode.tv_show_id == 0 {
            episode.tv_show_id = tv_id;
        }
        Ok(episode)
    }

    #[instrument(skip(self, append))]
    async fn get_person(&self, id: u64, append: Option<&[&str]>) -> Result<Person> {
        let query = detail_query(append, PERSON_APPEND);
        self.fetch(&format!("person/{id}"), &query).await
    }

    #[instrument(skip(self, append))]
    async fn get_collection(&self, id: u64, append: Option<&[&str]>) -> Result<Collection> {
        let query = detail_query(append, COLLECTION_APPEND);
        self.fetch(&format!("collection/{id}"), &query).await
    }

    #[instrument(skip(self, append))]
    async fn get_company(&self, id: u64, append: Option<&[&str]>) -> Result<Company> {
        let query = detail_query(append, COMPANY_APPEND);
        self.fetch(&format!("company/{id}"), &query).await
    }

    #[instrument(skip_all)]
    async fn search_movie(&self, params: &SearchParams) -> Result<Vec<Movie>> {
        self.fetch_results("search/movie", &params.to_query(Some("year")))
            .await
    }

    #[instrument(skip_all)]
    async fn search_tv_show(&self, params: &SearchParams) -> Result<Vec<TvShow>> {
        let query = params.to_query(Some("first_air_date_year"));
        self.fetch_results("search/tv", &query).await
    }

    #[instrument(skip_all)]
    async fn search_person(&self, params: &SearchParams) -> Result<Vec<Person>> {
        self.fetch_results("search/person", &params.to_query(None))
            .await
    }

    #[instrument(skip_all)]
    async fn search_collection(&self, params: &SearchParams) -> Result<Vec<Collection>> {
        self.fetch_results("search/collection", &params.to_query(None))
            .await
    }

    #[instrument(skip_all)]
    async fn search_company(&self, params: &SearchParams) -> Result<Vec<Company>> {
        self.fetch_results("search/company", &params.to_query(None))
            .await
    }

    #[instrument(skip_all)]
    async fn latest_movie(&self) -> Result<Movie> {
        self.fetch("movie/latest", &[]).await
    }

    #[instrument(skip_all)]
    async fn upcoming_movies(&self, page: u32) -> Result<Vec<Movie>> {
        self.fetch_results("movie/upcoming", &page_query(page)).await
    }

    #[instrument(skip_all)]
    async fn now_playing_movies(&self, page: u32) -> Result<Vec<Movie>> {
        self.fetch_results("movie/now_playing", &page_query(page))
            .await
    }

    #[instrument(skip_all)]
    async fn popular_movies(&self, page: u32) -> Result<Vec<Movie>> {
        self.fetch_results("movie/popular", &page_query(page)).await
    }

    #[instrument(skip_all)]
    async fn top_rated_movies(&self, page: u32) -> Result<Vec<Movie>> {
        self.fetch_results("movie/top_rated", &page_query(page)).await
    }

    #[instrument(skip_all)]
    async fn latest_tv_show(&self) -> Result<TvShow> {
        self.fetch("tv/latest", &[]).await
    }

    #[instrument(skip_all)]
    async fn popular_tv_shows(&self, page: u32) -> Result<Vec<TvShow>> {
        self.fetch_results("tv/popular", &page_query(page)).await
    }

    #[instrument(skip_all)]
    async fn on_the_air_tv_shows(&self, page: u32) -> Result<Vec<TvShow>> {
        self.fetch_results("tv/on_the_air", &page_query(page)).await
    }

    #[instrument(skip_all)]
    async fn airing_today_tv_shows(&self, page: u32) -> Result<Vec<TvShow>> {
        self.fetch_results("tv/airing_today", &page_query(page)).await
    }

    #[instrument(skip_all)]
    async fn top_rated_tv_shows(&self, page: u32) -> Result<Vec<TvShow>> {
        self.fetch_results("tv/top_rated", &page_query(page)).await
    }

    #[instrument(skip_all)]
    async fn latest_person(&self) -> Result<Person> {
        self.fetch("person/latest", &[]).await
    }

    #[instrument(skip_all)]
    async fn popular_persons(&self, page: u32) -> Result<Vec<Person>> {
        self.fetch_results("person/popular", &page_query(page)).await
    }

    #[instrument(skip(self))]
    async fn find(&self, external_id: &str, source: ExternalSource) -> Result<FindResults> {
        let path = format!("find/{}", path_segment(external_id)?);
        self.fetch(&path, &find_query(source)).await
    }

    async fn find_movie(&self, external_id: &str, source: ExternalSource) -> Result<Vec<Movie>> {
        Ok(self.find(external_id, source).await?.movie_results)
    }

    async fn find_person(
        &self,
        external_id: &str,
        source: ExternalSource,
    ) -> Result<Vec<Person>> {
        Ok(self.find(external_id, source).await?.person_results)
    }

    async fn find_tv_show(
        &self,
        external_id: &str,
        source: ExternalSource,
    ) -> Result<Vec<TvShow>> {
        Ok(self.find(external_id, source).await?.tv_results)
    }

    async fn find_season(
        &self,
        external_id: &str,
        source: ExternalSource,
    ) -> Result<Vec<Season>> {
        Ok(self.find(external_id, source).await?.tv_season_results)
    }

    async fn find_episode(
        &self,
        external_id: &str,
        source: ExternalSource,
    ) -> Result<Vec<Episode>> {
        Ok(self.find(external_id, source).await?.tv_episode_results)
    }
}
