use crate::model::{Movie, MovieId};

/// The movie-music quiz dataset.
#[must_use]
pub fn movies() -> Vec<Movie> {
    [
        (1, "The War of the Worlds", 1938, "Bernard Herrmann"),
        (2, "Citizen Kane", 1941, "Bernard Herrmann"),
        (3, "The Day the Earth Stood Still", 1951, "Bernard Herrmann"),
        (4, "Vertigo", 1958, "Bernard Herrmann"),
        (5, "North by Northwest", 1959, "Bernard Herrmann"),
        (6, "Psycho", 1960, "Bernard Herrmann"),
        (7, "Torn Curtain", 1964, "Bernard Herrmann"),
        (8, "The Good, the Bad, and the Ugly", 1966, "Ennio Morricone"),
        (9, "Fahrenheit 451", 1966, "Bernard Herrmann"),
        (10, "Taxi Driver", 1975, "Bernard Herrmann"),
        (11, "Dr. No", 1962, "John Barry"),
        (12, "Patton", 1970, "Jerry Goldsmith"),
        (13, "Planet of the Apes", 1968, "Jerry Goldsmith"),
        (14, "The Omen", 1977, "Jerry Goldsmith"),
        (15, "The Sugarland Express", 1974, "John Williams"),
        (16, "Jaws", 1975, "John Williams"),
        (17, "Star Wars", 1977, "John Williams"),
        (18, "Back to the Future", 1985, "Alan Silvestri"),
        (19, "Titanic", 1997, "James Horner"),
        (20, "Glory", 1989, "James Horner"),
        (21, "Star Trek II: The Wrath of Khan", 1982, "James Horner"),
        (22, "The Forbidden Zone", 1979, "Danny Elfman"),
        (23, "Weird Science", 1985, "Danny Elfman"),
        (24, "Pee Wee\u{2019}s Big Adventure", 1985, "Danny Elfman"),
        (25, "Beetlejuice", 1988, "Danny Elfman"),
        (26, "Edward Scissorhands", 1992, "Danny Elfman"),
        (27, "Rain Man", 1988, "Hans Zimmer"),
        (28, "The Thin Red Line", 1998, "Hans Zimmer"),
        (29, "Interstellar", 2014, "Hans Zimmer"),
        (30, "Inception", 2010, "Hans Zimmer"),
        (31, "High Noon", 1952, "Dimitri Tiomkin"),
    ]
    .into_iter()
    .map(|(id, title, year, composer)| Movie::new(MovieId::new(id), title, year, composer))
    .collect()
}
