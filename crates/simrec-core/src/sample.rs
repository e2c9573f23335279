//! Built-in demonstration catalog

use crate::records::{ItemRecord, ListField};

struct SampleMovie {
    id: &'static str,
    title: &'static str,
    overview: &'static str,
    genres: &'static [&'static str],
    keywords: &'static [&'static str],
    cast: &'static [&'static str],
    crew: &'static [&'static str],
}

const SAMPLE_MOVIES: &[SampleMovie] = &[
    SampleMovie {
        id: "278",
        title: "The Shawshank Redemption",
        overview: "Two imprisoned men bond over a number of years, finding solace and eventual redemption through acts of common decency.",
        genres: &["Drama"],
        keywords: &["prison", "friendship", "redemption"],
        cast: &["Tim Robbins", "Morgan Freeman"],
        crew: &["Frank Darabont"],
    },
    SampleMovie {
        id: "238",
        title: "The Godfather",
        overview: "The aging patriarch of an organized crime dynasty transfers control to his reluctant son.",
        genres: &["Crime", "Drama"],
        keywords: &["mafia", "family", "crime"],
        cast: &["Marlon Brando", "Al Pacino"],
        crew: &["Francis Ford Coppola"],
    },
    SampleMovie {
        id: "680",
        title: "Pulp Fiction",
        overview: "The lives of two mob hitmen, a boxer, a gangster and his wife intertwine in four tales of violence and redemption.",
        genres: &["Crime", "Drama"],
        keywords: &["crime", "violence", "redemption"],
        cast: &["John Travolta", "Samuel L. Jackson"],
        crew: &["Quentin Tarantino"],
    },
    SampleMovie {
        id: "155",
        title: "The Dark Knight",
        overview: "When the menace known as the Joker wreaks havoc and chaos on the people of Gotham.",
        genres: &["Action", "Crime", "Drama"],
        keywords: &["superhero", "batman", "joker"],
        cast: &["Christian Bale", "Heath Ledger"],
        crew: &["Christopher Nolan"],
    },
    SampleMovie {
        id: "550",
        title: "Fight Club",
        overview: "An insomniac office worker and a devil-may-care soapmaker form an underground fight club.",
        genres: &["Drama"],
        keywords: &["fight club", "underground", "rebellion"],
        cast: &["Brad Pitt", "Edward Norton"],
        crew: &["David Fincher"],
    },
    SampleMovie {
        id: "27205",
        title: "Inception",
        overview: "A thief who steals corporate secrets through dream-sharing technology is given the inverse task.",
        genres: &["Action", "Adventure", "Sci-Fi"],
        keywords: &["dreams", "technology", "heist"],
        cast: &["Leonardo DiCaprio", "Joseph Gordon-Levitt"],
        crew: &["Christopher Nolan"],
    },
    SampleMovie {
        id: "603",
        title: "The Matrix",
        overview: "A computer programmer discovers that reality as he knows it is a simulation created by machines.",
        genres: &["Action", "Sci-Fi"],
        keywords: &["matrix", "simulation", "reality"],
        cast: &["Keanu Reeves", "Laurence Fishburne"],
        crew: &["Lana Wachowski", "Lilly Wachowski"],
    },
    SampleMovie {
        id: "769",
        title: "Goodfellas",
        overview: "The story of Henry Hill and his life in the mob, covering his relationship with his wife Karen.",
        genres: &["Biography", "Crime", "Drama"],
        keywords: &["mafia", "organized crime", "biography"],
        cast: &["Robert De Niro", "Ray Liotta"],
        crew: &["Martin Scorsese"],
    },
    SampleMovie {
        id: "274",
        title: "The Silence of the Lambs",
        overview: "A young FBI cadet must receive the help of an incarcerated and manipulative killer.",
        genres: &["Crime", "Drama", "Thriller"],
        keywords: &["fbi", "serial killer", "psychological"],
        cast: &["Jodie Foster", "Anthony Hopkins"],
        crew: &["Jonathan Demme"],
    },
    SampleMovie {
        id: "157336",
        title: "Interstellar",
        overview: "A team of explorers travel through a wormhole in space in an attempt to ensure humanity survival.",
        genres: &["Adventure", "Drama", "Sci-Fi"],
        keywords: &["space", "wormhole", "survival"],
        cast: &["Matthew McConaughey", "Anne Hathaway"],
        crew: &["Christopher Nolan"],
    },
];

fn list(values: &[&str]) -> ListField {
    ListField::List(values.iter().map(|v| v.to_string()).collect())
}

/// The ten-movie demonstration catalog as import records
pub fn sample_records() -> Vec<ItemRecord> {
    SAMPLE_MOVIES
        .iter()
        .map(|movie| ItemRecord {
            id: Some(movie.id.to_string()),
            title: Some(movie.title.to_string()),
            tags: None,
            overview: Some(movie.overview.to_string()),
            genres: list(movie.genres),
            keywords: list(movie.keywords),
            cast: list(movie.cast),
            crew: list(movie.crew),
        })
        .collect()
}
