//! Feed rendering - turns fetched posts into display markup.

mod date;
mod escape;

pub use date::{INVALID_DATE, format_timestamp};
pub use escape::escape_text;

use crate::domain::Post;

/// Shown when the store holds no posts.
pub const EMPTY_PLACEHOLDER: &str =
    r#"<p class="no-posts">No posts yet. Be the first to create one!</p>"#;

/// Shown when the posts could not be loaded.
pub const ERROR_PLACEHOLDER: &str =
    r#"<p class="error">Failed to load posts. Please refresh the page.</p>"#;

/// What the feed currently displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feed {
    /// The store returned no posts.
    Empty,
    /// One markup fragment per post, in store order.
    Posts(Vec<String>),
    /// The last load failed.
    Unavailable,
}

impl Feed {
    /// Number of post fragments.
    pub fn len(&self) -> usize {
        match self {
            Feed::Posts(fragments) => fragments.len(),
            Feed::Empty | Feed::Unavailable => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_markup(&self) -> String {
        match self {
            Feed::Empty => EMPTY_PLACEHOLDER.to_string(),
            Feed::Posts(fragments) => fragments.concat(),
            Feed::Unavailable => ERROR_PLACEHOLDER.to_string(),
        }
    }
}

/// Render posts into a feed. Order is preserved exactly.
pub fn render(posts: &[Post]) -> Feed {
    if posts.is_empty() {
        return Feed::Empty;
    }

    Feed::Posts(posts.iter().map(render_post).collect())
}

/// Render one post. The body is trusted markup and is embedded verbatim.
pub fn render_post(post: &Post) -> String {
    format!(
        concat!(
            "\n<article class=\"post\">\n",
            "    <h2>{title}</h2>\n",
            "    <div class=\"post-meta\">\n",
            "        <span class=\"author\">By {author}</span>\n",
            "        <span class=\"date\">{date}</span>\n",
            "    </div>\n",
            "    <div class=\"post-content\">\n",
            "        {body}\n",
            "    </div>\n",
            "</article>\n",
        ),
        title = escape_text(&post.title),
        author = escape_text(&post.author),
        date = format_timestamp(post.timestamp),
        body = post.body,
    )
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn arb_post() -> impl Strategy<Value = Post> {
        (".{0,24}", ".{0,16}", ".{0,64}", any::<i64>())
            .prop_map(|(title, author, body, timestamp)| Post::new(title, author, body, timestamp))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn one_fragment_per_post_in_order(
            posts in proptest::collection::vec(arb_post(), 1..20)
        ) {
            let Feed::Posts(fragments) = render(&posts) else {
                panic!("non-empty input rendered as a placeholder");
            };

            prop_assert_eq!(fragments.len(), posts.len());
            for (fragment, post) in fragments.iter().zip(&posts) {
                let heading = format!("<h2>{}</h2>", escape_text(&post.title));
                prop_assert!(fragment.contains(&heading));
                prop_assert!(fragment.contains(&format_timestamp(post.timestamp)));
            }
        }
    }

    fn post(title: &str, timestamp: i64) -> Post {
        Post::new(title, "Ann", format!("<p>{title} body</p>"), timestamp)
    }

    #[test]
    fn test_empty_renders_placeholder_only() {
        let feed = render(&[]);

        assert_eq!(feed, Feed::Empty);
        assert_eq!(feed.to_markup(), EMPTY_PLACEHOLDER);
    }

    #[test]
    fn test_one_fragment_per_post_in_input_order() {
        // Deliberately not sorted by timestamp.
        let posts = vec![
            post("Second", 1_704_412_800_000_000_000),
            post("First", 1_600_000_000_000_000_000),
            post("Third", 1_710_000_000_000_000_000),
        ];

        let Feed::Posts(fragments) = render(&posts) else {
            panic!("expected post fragments");
        };

        assert_eq!(fragments.len(), posts.len());
        for (fragment, post) in fragments.iter().zip(&posts) {
            assert!(fragment.contains(&format!("<h2>{}</h2>", post.title)));
        }
    }

    #[test]
    fn test_fragment_contents() {
        let p = Post::new("Hello", "Ann", "<p>Hi <em>there</em></p>", 1_704_412_800_000_000_000);
        let fragment = render_post(&p);

        assert!(fragment.contains("<h2>Hello</h2>"));
        assert!(fragment.contains(r#"<span class="author">By Ann</span>"#));
        assert!(fragment.contains(r#"<span class="date">January 5, 2024</span>"#));
        assert!(fragment.contains("<p>Hi <em>there</em></p>"));
    }

    #[test]
    fn test_body_is_not_escaped_but_title_is() {
        let p = Post::new("1 < 2", "A&B", "<script>x()</script>", 0);
        let fragment = render_post(&p);

        assert!(fragment.contains("<h2>1 &lt; 2</h2>"));
        assert!(fragment.contains("By A&amp;B"));
        assert!(fragment.contains("<script>x()</script>"));
    }

    #[test]
    fn test_markup_joins_fragments() {
        let posts = vec![post("A", 0), post("B", 0)];
        let feed = render(&posts);
        let markup = feed.to_markup();

        assert_eq!(feed.len(), 2);
        let a = markup.find("<h2>A</h2>").unwrap();
        let b = markup.find("<h2>B</h2>").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_unavailable_markup() {
        assert_eq!(Feed::Unavailable.to_markup(), ERROR_PLACEHOLDER);
        assert!(Feed::Unavailable.is_empty());
    }
}
