use crate::model::{Composer, ComposerId};

/// The composer quiz dataset.
#[must_use]
pub fn composers() -> Vec<Composer> {
    [
        (1, "Bernard Herrmann", 1911, "New York City, USA"),
        (2, "Ennio Morricone", 1928, "Rome, Italy"),
        (3, "John Barry", 1933, "York, England"),
        (4, "Jerry Goldsmith", 1929, "Los Angeles, USA"),
        (5, "John Williams", 1932, "Floral Park, New York, USA"),
        (6, "Alan Silvestri", 1950, "New York City, USA"),
        (7, "James Horner", 1953, "Los Angeles, USA"),
        (8, "Danny Elfman", 1953, "Los Angeles, USA"),
        (9, "Hans Zimmer", 1957, "Frankfurt, Germany"),
        (10, "Dimitri Tiomkin", 1894, "St. Petersburg, Russia"),
    ]
    .into_iter()
    .map(|(id, name, year, place)| Composer::new(ComposerId::new(id), name, year, place))
    .collect()
}
