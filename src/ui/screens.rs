//! Screen state for the two views the application has: the grouped catalog
//! and the per-movie detail page. Both hold plain data so the drawing code in
//! `app.rs` stays a pure function of this state.

use crate::models::Movie;

/// One horizontal shelf on the catalog screen: a category label plus the
/// movies that belong to it, in fetch order.
pub(crate) struct CategoryRow {
    pub(crate) name: String,
    pub(crate) movies: Vec<Movie>,
}

/// Cluster a title-sorted movie list into category rows. Categories appear in
/// first-encounter order, so the shelf order follows each category's
/// alphabetically first title rather than the category names themselves.
pub(crate) fn group_by_category(movies: &[Movie]) -> Vec<CategoryRow> {
    let mut groups: Vec<CategoryRow> = Vec::new();
    for movie in movies {
        match groups.iter_mut().find(|group| group.name == movie.category) {
            Some(group) => group.movies.push(movie.clone()),
            None => groups.push(CategoryRow {
                name: movie.category.clone(),
                movies: vec![movie.clone()],
            }),
        }
    }
    groups
}

/// State for the grouped catalog view: the shelves plus a (row, column)
/// cursor. The cursor always points at a real movie unless the catalog is
/// empty.
pub(crate) struct CatalogScreen {
    pub(crate) groups: Vec<CategoryRow>,
    pub(crate) selected_group: usize,
    pub(crate) selected_movie: usize,
}

impl CatalogScreen {
    pub(crate) fn new(movies: &[Movie]) -> Self {
        Self {
            groups: group_by_category(movies),
            selected_group: 0,
            selected_movie: 0,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The movie under the cursor, if any.
    pub(crate) fn current_movie(&self) -> Option<&Movie> {
        self.groups
            .get(self.selected_group)
            .and_then(|group| group.movies.get(self.selected_movie))
    }

    /// Move the cursor within the current shelf, clamping at both ends.
    pub(crate) fn move_horizontal(&mut self, offset: isize) {
        let Some(group) = self.groups.get(self.selected_group) else {
            return;
        };
        if group.movies.is_empty() {
            return;
        }
        let len = group.movies.len() as isize;
        let mut new = self.selected_movie as isize + offset;
        if new < 0 {
            new = 0;
        }
        if new >= len {
            new = len - 1;
        }
        self.selected_movie = new as usize;
    }

    /// Move the cursor to an adjacent shelf, clamping the column to the new
    /// shelf's width so the cursor never dangles past the end of a row.
    pub(crate) fn move_vertical(&mut self, offset: isize) {
        if self.groups.is_empty() {
            return;
        }
        let len = self.groups.len() as isize;
        let mut new = self.selected_group as isize + offset;
        if new < 0 {
            new = 0;
        }
        if new >= len {
            new = len - 1;
        }
        self.selected_group = new as usize;

        let width = self.groups[self.selected_group].movies.len();
        if width == 0 {
            self.selected_movie = 0;
        } else if self.selected_movie >= width {
            self.selected_movie = width - 1;
        }
    }
}

/// State for the detail view. Deliberately holds only the navigation
/// parameter, a title string; resolution against the in-memory list happens
/// at draw time so a stale or unknown title degrades to a "Movie not Found"
/// page instead of an error.
pub(crate) struct DetailScreen {
    pub(crate) title: String,
}

impl DetailScreen {
    pub(crate) fn for_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, category: &str) -> Movie {
        Movie {
            image: "poster_sample".to_string(),
            title: title.to_string(),
            category: category.to_string(),
            synopsis: String::new(),
            original_title: title.to_string(),
            genre: String::new(),
            episodes: 1,
            year: 2020,
            country: String::new(),
            director: String::new(),
            cast: String::new(),
            available_until: String::new(),
        }
    }

    #[test]
    fn grouping_preserves_first_encounter_order() {
        let movies = vec![
            movie("Alpha", "Animation"),
            movie("Beta", "Drama"),
            movie("Gamma", "Animation"),
        ];
        let groups = group_by_category(&movies);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "Animation");
        assert_eq!(groups[0].movies.len(), 2);
        assert_eq!(groups[1].name, "Drama");
    }

    #[test]
    fn seeded_catalog_groups_into_three_shelves() {
        let catalog = crate::seed::bundled_catalog().expect("bundled catalog must parse");
        assert_eq!(group_by_category(&catalog).len(), 3);
    }

    #[test]
    fn cursor_clamps_inside_the_shelf() {
        let movies = vec![
            movie("Alpha", "Animation"),
            movie("Beta", "Animation"),
            movie("Gamma", "Drama"),
        ];
        let mut screen = CatalogScreen::new(&movies);

        screen.move_horizontal(5);
        assert_eq!(screen.current_movie().expect("movie").title, "Beta");
        screen.move_horizontal(-5);
        assert_eq!(screen.current_movie().expect("movie").title, "Alpha");
    }

    #[test]
    fn moving_between_shelves_clamps_the_column() {
        let movies = vec![
            movie("Alpha", "Animation"),
            movie("Beta", "Animation"),
            movie("Gamma", "Drama"),
        ];
        let mut screen = CatalogScreen::new(&movies);

        screen.move_horizontal(1);
        screen.move_vertical(1);
        // The Drama shelf only has one movie, so the column snaps back.
        assert_eq!(screen.current_movie().expect("movie").title, "Gamma");
    }

    #[test]
    fn empty_catalog_has_no_current_movie() {
        let mut screen = CatalogScreen::new(&[]);
        assert!(screen.current_movie().is_none());
        screen.move_horizontal(1);
        screen.move_vertical(1);
        assert!(screen.current_movie().is_none());
    }
}
