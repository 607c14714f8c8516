//! HTML rendering of page models.
//!
//! Two templates exist, addressed by name: `PhotoPage` renders a
//! [`PhotoPageModel`] and `IndexPage` renders an [`IndexPageModel`]. Any
//! other name is a configuration error.
//!
//! Templates are [maud](https://maud.lambda.xyz/) macros, so they are checked
//! at compile time and every interpolated value is escaped. The stylesheet is
//! embedded in the binary and written once at the site root; pages link to
//! it through the model's browse prefix.

use crate::breadcrumbs::Breadcrumb;
use crate::model::{IndexPageModel, PhotoPageModel};
use maud::{DOCTYPE, Markup, html};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// The default stylesheet, written to the target root by the generator.
pub const STYLESHEET: &str = include_str!("../static/carousel.css");

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),
    #[error("Template {template} cannot render a {model} model")]
    ModelMismatch {
        template: Template,
        model: &'static str,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    PhotoPage,
    IndexPage,
}

impl FromStr for Template {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PhotoPage" => Ok(Template::PhotoPage),
            "IndexPage" => Ok(Template::IndexPage),
            other => Err(RenderError::UnknownTemplate(other.to_string())),
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Template::PhotoPage => f.write_str("PhotoPage"),
            Template::IndexPage => f.write_str("IndexPage"),
        }
    }
}

/// A model handed to [`render`].
#[derive(Debug, Clone, Copy)]
pub enum PageModel<'a> {
    Photo(&'a PhotoPageModel),
    Index(&'a IndexPageModel),
}

impl PageModel<'_> {
    fn kind(&self) -> &'static str {
        match self {
            PageModel::Photo(_) => "photo page",
            PageModel::Index(_) => "index page",
        }
    }
}

/// Render `model` with the template called `name`.
pub fn render(name: &str, model: PageModel<'_>, stylesheet: &str) -> Result<String, RenderError> {
    let template: Template = name.parse()?;
    let markup = match (template, model) {
        (Template::PhotoPage, PageModel::Photo(photo)) => photo_page(photo, stylesheet),
        (Template::IndexPage, PageModel::Index(index)) => index_page(index, stylesheet),
        (template, model) => {
            return Err(RenderError::ModelMismatch {
                template,
                model: model.kind(),
            });
        }
    };
    Ok(markup.into_string())
}

/// Render `model` and write the result to `path`.
pub fn render_to(
    name: &str,
    model: PageModel<'_>,
    stylesheet: &str,
    path: &Path,
) -> Result<(), RenderError> {
    let html = render(name, model, stylesheet)?;
    std::fs::write(path, html)?;
    Ok(())
}

// ============================================================================
// Layout
// ============================================================================

fn base_document(title: &str, stylesheet_href: &str, body_class: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href=(stylesheet_href);
            }
            body class=(body_class) {
                (content)
            }
        }
    }
}

/// Breadcrumb trail ending in the unlinked label of the current page.
fn breadcrumb_nav(crumbs: &[Breadcrumb], final_crumb: &str) -> Markup {
    html! {
        nav.breadcrumb {
            @for crumb in crumbs {
                a href=(crumb.up_path) { (crumb.label) }
                " › "
            }
            span.final-crumb { (final_crumb) }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

fn photo_page(model: &PhotoPageModel, stylesheet: &str) -> Markup {
    let title = format!("{} - {}", model.page_title, model.gallery_title);
    let stylesheet_href = format!("{}{}", model.browse_prefix, stylesheet);

    let content = html! {
        header.site-header {
            (breadcrumb_nav(&model.breadcrumbs, &model.final_crumb))
        }
        main.photo-page {
            nav.photo-nav {
                @if let Some(prev) = &model.prev {
                    a.prev href=(prev) rel="prev" { "‹ Previous" }
                }
                @if let Some(next) = &model.next {
                    a.next href=(next) rel="next" { "Next ›" }
                }
            }
            figure.photo-frame {
                a href=(model.full_photo_url) {
                    img src=(model.framed_photo_url)
                        width=(model.width)
                        height=(model.height)
                        alt=(model.page_title);
                }
                @if !model.caption.is_empty() {
                    figcaption { (model.caption) }
                }
            }
        }
    };

    base_document(&title, &stylesheet_href, "photo-view", content)
}

fn index_page(model: &IndexPageModel, stylesheet: &str) -> Markup {
    let title = if model.breadcrumbs.is_empty() {
        model.gallery_title.clone()
    } else {
        format!("{} - {}", model.this_dir, model.gallery_title)
    };
    let stylesheet_href = format!("{}{}", model.browse_prefix, stylesheet);

    let content = html! {
        header.site-header {
            (breadcrumb_nav(&model.breadcrumbs, &model.final_crumb))
        }
        main.index-page {
            h1 { (model.this_dir) }
            @if !model.sub_dirs.is_empty() {
                div.album-grid {
                    @for sub in &model.sub_dirs {
                        a.album-card href=(sub.dir) {
                            img src=(sub.preview)
                                width=(sub.width)
                                height=(sub.height)
                                alt=(sub.name)
                                loading="lazy";
                            span.album-title { (sub.name) }
                        }
                    }
                }
            }
            @if !model.images.is_empty() {
                div.thumbnail-grid {
                    @for image in &model.images {
                        a.thumb-link href=(image.page_url) {
                            img src=(image.thumb_url)
                                width=(image.width)
                                height=(image.height)
                                alt=(image.caption)
                                loading="lazy";
                        }
                    }
                }
            }
        }
    };

    base_document(&title, &stylesheet_href, "index-view", content)
}
