//! Human-readable output of TMDB models via `tracing`.

use tmdbkit_api::{
    Collection, Company, Configuration, Episode, FindResults, Movie, Person, Role, Season,
    Trailers, TvShow,
};

/// Number of cast members shown in detail views.
const TOP_CAST: usize = 5;

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

/// Logs the server-side configuration.
pub fn report_configuration(config: &Configuration, secure: bool) {
    tracing::info!("Image Base URL: {}", config.image_base_url(secure));
    tracing::info!("Poster Sizes: {}", config.images.poster_sizes.join(","));
    tracing::info!("Backdrop Sizes: {}", config.images.backdrop_sizes.join(","));
    tracing::info!("Profile Sizes: {}", config.images.profile_sizes.join(","));
    tracing::info!("Still Sizes: {}", config.images.still_sizes.join(","));
    tracing::info!("Logo Sizes: {}", config.images.logo_sizes.join(","));
}

/// Logs a movie's details, including whatever lazy fields are loaded.
pub fn report_movie(movie: &Movie) {
    tracing::info!("ID: {}", movie.id);
    tracing::info!("Title: {}", movie.title);
    tracing::info!("Original Title: {}", or_dash(&movie.original_title));
    tracing::info!("Release Date: {}", or_dash(&movie.release_date));
    tracing::info!(
        "Runtime: {}",
        movie
            .runtime
            .map_or_else(|| String::from("-"), |r| format!("{r}min"))
    );
    if let Some(genres) = movie.genres.get() {
        tracing::info!("Genres: {}", join_names(genres.iter().map(|g| g.name.as_str())));
    }
    if let Some(source) = movie.trailers.get().and_then(Trailers::first_youtube_source) {
        tracing::info!("Trailer: https://www.youtube.com/watch?v={source}");
    }
    if let Some(casts) = movie.casts.get() {
        let directors = join_names(casts.with_job("Director").map(|m| m.name.as_str()));
        tracing::info!("Director: {}", or_dash(&directors));
        for member in casts.cast.iter().take(TOP_CAST) {
            tracing::info!("  {} as {}", member.name, or_dash(&member.character));
        }
    }
    tracing::info!("Overview: {}", or_dash(&movie.overview));
}

/// Logs a movie list as a table.
pub fn report_movies(movies: &[Movie]) {
    if movies.is_empty() {
        tracing::info!("No results.");
        return;
    }
    tracing::info!("ID\tReleaseDate\tTitle");
    for movie in movies {
        tracing::info!(
            "{}\t{}\t{}",
            movie.id,
            or_dash(&movie.release_date),
            movie.title
        );
    }
}

/// Logs a TV show's details.
pub fn report_tv_show(show: &TvShow) {
    tracing::info!("ID: {}", show.id);
    tracing::info!("Name: {}", show.name);
    tracing::info!("Original Name: {}", or_dash(&show.original_name));
    tracing::info!("First Air Date: {}", or_dash(&show.first_air_date));
    tracing::info!("Status: {}", or_dash(&show.status));
    tracing::info!("Seasons: {}", show.number_of_seasons);
    tracing::info!("Episodes: {}", show.number_of_episodes);
    if !show.networks.is_empty() {
        tracing::info!(
            "Networks: {}",
            join_names(show.networks.iter().map(|n| n.name.as_str()))
        );
    }
    if let Some(genres) = show.genres.get() {
        tracing::info!("Genres: {}", join_names(genres.iter().map(|g| g.name.as_str())));
    }
    if let Some(seasons) = show.seasons.get() {
        tracing::info!("---");
        for season in seasons {
            tracing::info!(
                "  Season {}: {} episodes (air_date: {})",
                season.season_number,
                season.number_of_episodes(),
                or_dash(&season.air_date),
            );
        }
    }
}

/// Logs a TV show list as a table.
pub fn report_tv_shows(shows: &[TvShow]) {
    if shows.is_empty() {
        tracing::info!("No results.");
        return;
    }
    tracing::info!("ID\tFirstAirDate\tName");
    for show in shows {
        tracing::info!(
            "{}\t{}\t{}",
            show.id,
            or_dash(&show.first_air_date),
            show.name
        );
    }
}

/// Logs a season and its episodes.
pub fn report_season(season: &Season) {
    tracing::info!(
        "Season {}: {} (tv_id: {})",
        season.season_number,
        or_dash(&season.name),
        season.tv_show_id
    );
    tracing::info!("Episodes:");
    for ep in &season.episodes {
        tracing::info!(
            "  E{:02}: {} (air_date: {}, runtime: {})",
            ep.episode_number,
            ep.name,
            or_dash(&ep.air_date),
            ep.runtime
                .map_or_else(|| String::from("-"), |r| format!("{r}min")),
        );
    }
}

/// Logs an episode.
pub fn report_episode(episode: &Episode) {
    tracing::info!(
        "S{:02}E{:02}: {} (tv_id: {})",
        episode.season_number,
        episode.episode_number,
        episode.name,
        episode.tv_show_id
    );
    tracing::info!("Air Date: {}", or_dash(&episode.air_date));
    let directors = episode
        .crew
        .iter()
        .filter(|m| m.job == "Director")
        .map(|m| m.name.as_str());
    tracing::info!("Director: {}", or_dash(&join_names(directors)));
    for guest in &episode.guest_stars {
        tracing::info!("  {} as {}", guest.name, or_dash(&guest.character));
    }
    tracing::info!("Overview: {}", or_dash(&episode.overview));
}

/// Logs a person's details.
pub fn report_person(person: &Person) {
    tracing::info!("ID: {}", person.id);
    tracing::info!("Name: {}", person.name);
    tracing::info!("Birthday: {}", or_dash(&person.birthday));
    tracing::info!("Place of Birth: {}", or_dash(&person.place_of_birth));
    tracing::info!("Known For: {}", or_dash(&person.known_for_department));
}

/// Logs acting roles in the order given.
pub fn report_roles(roles: &[Role]) {
    tracing::info!("Roles ({}):", roles.len());
    for role in roles {
        let kind = match role {
            Role::Movie(_) => "movie",
            Role::TvShow(_) => "tv",
        };
        tracing::info!(
            "  [{kind}] {} as {}",
            role.media_title(),
            or_dash(role.character())
        );
    }
}

/// Logs a person list as a table.
pub fn report_persons(persons: &[Person]) {
    if persons.is_empty() {
        tracing::info!("No results.");
        return;
    }
    tracing::info!("ID\tName");
    for person in persons {
        tracing::info!("{}\t{}", person.id, person.name);
    }
}

/// Logs a collection and its movies.
pub fn report_collection(collection: &Collection) {
    tracing::info!("ID: {}", collection.id);
    tracing::info!("Name: {}", collection.name);
    tracing::info!("Overview: {}", or_dash(&collection.overview));
    report_movies(collection.movies());
}

/// Logs a collection list as a table.
pub fn report_collections(collections: &[Collection]) {
    if collections.is_empty() {
        tracing::info!("No results.");
        return;
    }
    tracing::info!("ID\tName");
    for collection in collections {
        tracing::info!("{}\t{}", collection.id, collection.name);
    }
}

/// Logs a company's details.
pub fn report_company(company: &Company) {
    tracing::info!("ID: {}", company.id);
    tracing::info!("Name: {}", company.name);
    tracing::info!("Headquarters: {}", or_dash(&company.headquarters));
    tracing::info!("Origin Country: {}", or_dash(&company.origin_country));
    if let Some(parent) = &company.parent_company {
        tracing::info!("Parent: {}", parent.name);
    }
}

/// Logs a company list as a table.
pub fn report_companies(companies: &[Company]) {
    if companies.is_empty() {
        tracing::info!("No results.");
        return;
    }
    tracing::info!("ID\tName");
    for company in companies {
        tracing::info!("{}\t{}", company.id, company.name);
    }
}

/// Logs every non-empty group of a find response.
pub fn report_find(found: &FindResults) {
    if found.is_empty() {
        tracing::info!("No results.");
        return;
    }
    for movie in &found.movie_results {
        tracing::info!("movie\t{}\t{}", movie.id, movie.title);
    }
    for person in &found.person_results {
        tracing::info!("person\t{}\t{}", person.id, person.name);
    }
    for show in &found.tv_results {
        tracing::info!("tv\t{}\t{}", show.id, show.name);
    }
    for season in &found.tv_season_results {
        tracing::info!(
            "season\t{}\ttv_id={} season={}",
            season.id,
            season.tv_show_id,
            season.season_number
        );
    }
    for episode in &found.tv_episode_results {
        tracing::info!(
            "episode\t{}\ttv_id={} S{:02}E{:02}",
            episode.id,
            episode.tv_show_id,
            episode.season_number,
            episode.episode_number
        );
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use tracing::subscriber::with_default;
    use tracing_mock::{expect, subscriber};

    use super::*;

    #[test]
    fn test_report_minimal_movie() {
        // Arrange
        let movie: Movie = serde_json::from_str(
            r#"{"id":550,"title":"Fight Club","release_date":"1999-10-15"}"#,
        )
        .unwrap();
        let (subscriber, handle) = subscriber::mock()
            .event(expect::event().with_fields(expect::msg("ID: 550")))
            .event(expect::event().with_fields(expect::msg("Title: Fight Club")))
            .event(expect::event().with_fields(expect::msg("Original Title: -")))
            .event(expect::event().with_fields(expect::msg("Release Date: 1999-10-15")))
            .event(expect::event().with_fields(expect::msg("Runtime: -")))
            .event(expect::event().with_fields(expect::msg("Overview: -")))
            .only()
            .run_with_handle();

        // Act
        with_default(subscriber, || {
            report_movie(&movie);
        });

        // Assert
        handle.assert_finished();
    }

    #[test]
    fn test_report_movie_with_loaded_extras() {
        // Arrange
        let movie: Movie = serde_json::from_str(
            r#"{"id":550,"title":"Fight Club","original_title":"Fight Club","runtime":139,
                "genres":[{"id":18,"name":"Drama"}],
                "trailers":{"youtube":[{"source":"SUXWAEX2jlg"}]},
                "casts":{"cast":[{"id":819,"name":"Edward Norton","character":"The Narrator"}],
                         "crew":[{"id":7467,"name":"David Fincher","job":"Director"}]}}"#,
        )
        .unwrap();
        let (subscriber, handle) = subscriber::mock()
            .event(expect::event().with_fields(expect::msg("ID: 550")))
            .event(expect::event().with_fields(expect::msg("Title: Fight Club")))
            .event(expect::event().with_fields(expect::msg("Original Title: Fight Club")))
            .event(expect::event().with_fields(expect::msg("Release Date: -")))
            .event(expect::event().with_fields(expect::msg("Runtime: 139min")))
            .event(expect::event().with_fields(expect::msg("Genres: Drama")))
            .event(expect::event().with_fields(expect::msg(
                "Trailer: https://www.youtube.com/watch?v=SUXWAEX2jlg",
            )))
            .event(expect::event().with_fields(expect::msg("Director: David Fincher")))
            .event(expect::event().with_fields(expect::msg("  Edward Norton as The Narrator")))
            .event(expect::event().with_fields(expect::msg("Overview: -")))
            .only()
            .run_with_handle();

        // Act
        with_default(subscriber, || {
            report_movie(&movie);
        });

        // Assert
        handle.assert_finished();
    }

    #[test]
    fn test_report_movies_preserves_order() {
        // Arrange
        let movies: Vec<Movie> = serde_json::from_str(
            r#"[{"id":603,"title":"The Matrix","release_date":"1999-03-31"},
                {"id":604,"title":"The Matrix Reloaded"}]"#,
        )
        .unwrap();
        let (subscriber, handle) = subscriber::mock()
            .event(expect::event().with_fields(expect::msg("ID\tReleaseDate\tTitle")))
            .event(expect::event().with_fields(expect::msg("603\t1999-03-31\tThe Matrix")))
            .event(expect::event().with_fields(expect::msg("604\t-\tThe Matrix Reloaded")))
            .only()
            .run_with_handle();

        // Act
        with_default(subscriber, || {
            report_movies(&movies);
        });

        // Assert
        handle.assert_finished();
    }

    #[test]
    fn test_report_empty_lists() {
        // Arrange
        let (subscriber, handle) = subscriber::mock()
            .event(expect::event().with_fields(expect::msg("No results.")))
            .event(expect::event().with_fields(expect::msg("No results.")))
            .event(expect::event().with_fields(expect::msg("No results.")))
            .only()
            .run_with_handle();

        // Act
        with_default(subscriber, || {
            report_tv_shows(&[]);
            report_persons(&[]);
            report_find(&FindResults::default());
        });

        // Assert
        handle.assert_finished();
    }

    #[test]
    fn test_report_season() {
        // Arrange
        let season: Season = serde_json::from_str(
            r#"{"id":3624,"show_id":1399,"name":"Season 1","season_number":1,
                "episodes":[{"id":63056,"episode_number":1,"name":"Winter Is Coming",
                             "air_date":"2011-04-17","runtime":62}]}"#,
        )
        .unwrap();
        let (subscriber, handle) = subscriber::mock()
            .event(expect::event().with_fields(expect::msg("Season 1: Season 1 (tv_id: 1399)")))
            .event(expect::event().with_fields(expect::msg("Episodes:")))
            .event(expect::event().with_fields(expect::msg(
                "  E01: Winter Is Coming (air_date: 2011-04-17, runtime: 62min)",
            )))
            .only()
            .run_with_handle();

        // Act
        with_default(subscriber, || {
            report_season(&season);
        });

        // Assert
        handle.assert_finished();
    }

    #[test]
    fn test_report_find_groups() {
        // Arrange
        let found: FindResults = serde_json::from_str(
            r#"{"movie_results":[{"id":550,"title":"Fight Club"}],
                "tv_episode_results":[{"id":63056,"show_id":1399,"season_number":1,"episode_number":1}]}"#,
        )
        .unwrap();
        let (subscriber, handle) = subscriber::mock()
            .event(expect::event().with_fields(expect::msg("movie\t550\tFight Club")))
            .event(expect::event().with_fields(expect::msg("episode\t63056\ttv_id=1399 S01E01")))
            .only()
            .run_with_handle();

        // Act
        with_default(subscriber, || {
            report_find(&found);
        });

        // Assert
        handle.assert_finished();
    }

    #[test]
    fn test_report_roles() {
        // Arrange
        let person: Person = serde_json::from_str(
            r#"{"id":287,"name":"Brad Pitt",
                "movie_credits":{"cast":[{"id":550,"title":"Fight Club","character":"Tyler Durden"}]},
                "tv_credits":{"cast":[{"id":1668,"name":"Friends","character":""}]}}"#,
        )
        .unwrap();
        let roles: Vec<Role> = person
            .movie_credits
            .get()
            .unwrap()
            .cast
            .iter()
            .cloned()
            .map(Role::Movie)
            .chain(
                person
                    .tv_credits
                    .get()
                    .unwrap()
                    .cast
                    .iter()
                    .cloned()
                    .map(Role::TvShow),
            )
            .collect();
        let (subscriber, handle) = subscriber::mock()
            .event(expect::event().with_fields(expect::msg("Roles (2):")))
            .event(expect::event().with_fields(expect::msg("  [movie] Fight Club as Tyler Durden")))
            .event(expect::event().with_fields(expect::msg("  [tv] Friends as -")))
            .only()
            .run_with_handle();

        // Act
        with_default(subscriber, || {
            report_roles(&roles);
        });

        // Assert
        handle.assert_finished();
    }
}
