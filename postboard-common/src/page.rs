use crate::render::{Card, Container, Page, CONTAINER_ID};
use askama_escape::{escape, Html};
use std::{cell::RefCell, convert::Infallible, rc::Rc};

/// Tailwind build the card classes are written for
const TAILWIND_SCRIPT: &str = "https://cdn.tailwindcss.com";

/// An HTML page that only exists in memory.
///
/// It behaves like a document with at most one element, the posts container.
pub struct StaticPage {
    title: String,
    container: Option<CardList>,
}

/// Handle to the container of a [`StaticPage`].
///
/// Clones share the same cards, like handles to a DOM element do.
#[derive(Clone, Default)]
pub struct CardList(Rc<RefCell<Vec<Card>>>);

impl Container for CardList {
    type Error = Infallible;

    fn clear(&self) -> Result<(), Infallible> {
        self.0.borrow_mut().clear();
        Ok(())
    }

    fn append_card(&self, card: &Card) -> Result<(), Infallible> {
        self.0.borrow_mut().push(card.clone());
        Ok(())
    }
}

impl Page for StaticPage {
    type Container = CardList;

    fn container(&self, id: &str) -> Option<CardList> {
        if id == CONTAINER_ID {
            self.container.clone()
        } else {
            None
        }
    }
}

impl StaticPage {
    pub fn new<S: Into<String>>(title: S) -> Self {
        StaticPage {
            title: title.into(),
            container: Some(CardList::default()),
        }
    }

    pub fn without_container<S: Into<String>>(title: S) -> Self {
        StaticPage {
            title: title.into(),
            container: None,
        }
    }

    pub fn cards(&self) -> Vec<Card> {
        self.container
            .as_ref()
            .map(|list| list.0.borrow().clone())
            .unwrap_or_default()
    }

    /// Serializes the whole document
    pub fn to_html(&self) -> String {
        let title = escape(&self.title, Html).to_string();
        let main = match self.container {
            Some(ref list) => {
                let cards = list
                    .0
                    .borrow()
                    .iter()
                    .map(Card::to_html)
                    .collect::<Vec<String>>()
                    .join("\n");
                format!(
                    "<div id=\"{}\" class=\"grid gap-4 md:grid-cols-2 lg:grid-cols-3\">\n{}\n</div>",
                    CONTAINER_ID, cards
                )
            }
            None => String::new(),
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<script src="{tailwind}"></script>
</head>
<body class="bg-gray-100">
<main class="container mx-auto p-4">
<h1 class="text-2xl font-bold mb-4">{title}</h1>
{main}
</main>
</body>
</html>
"#,
            title = title,
            tailwind = TAILWIND_SCRIPT,
            main = main,
        )
    }
}
