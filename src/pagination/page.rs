//! Page descriptors built on top of the chunker

use serde::Serialize;

use super::{chunk_with_early_overflow, PaginateError, Params, PAGE_SIZE};

/// A single page of a naturally paginated collection
///
/// `last_page` is always 1 (the newest page), and `start`, `end`, `total`
/// and `size` describe the whole collection rather than this page. Page
/// templates read these fields as-is, so they are kept in this shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NaturalPage<T> {
    /// Items on this page, oldest first
    pub data: Vec<T>,
    /// 1-based page number, page 1 holds the newest items
    pub current_page: usize,
    pub last_page: usize,
    pub total_pages: usize,
    pub start: usize,
    pub end: usize,
    pub total: usize,
    pub size: usize,
    /// The next older page, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<usize>,
    /// The next newer page, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_page: Option<usize>,
}

/// Caller props with the page merged in under the `page` key
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageProps<T, P = ()> {
    #[serde(flatten)]
    pub extra: P,
    pub page: NaturalPage<T>,
}

/// One generated route: its parameters and the props handed to the page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageRoute<T, P = ()> {
    pub params: Params,
    pub props: PageProps<T, P>,
}

impl<T, P> PageRoute<T, P> {
    /// The page descriptor of this route
    pub fn page(&self) -> &NaturalPage<T> {
        &self.props.page
    }
}

/// Options for [`paginate_naturally`]
#[derive(Debug, Clone, Default)]
pub struct PaginateOptions<P = ()> {
    /// Items per page, [`PAGE_SIZE`] when unset
    pub page_size: Option<usize>,
    /// Route parameters copied into every page
    pub params: Params,
    /// Props copied into every page
    pub props: P,
}

impl PaginateOptions {
    /// Options with no params and no props
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P> PaginateOptions<P> {
    /// Options carrying the given props
    pub fn with_props(props: P) -> Self {
        Self {
            page_size: None,
            params: Params::new(),
            props,
        }
    }

    /// Set the page size
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Set the route parameters
    pub fn params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }
}

/// Paginate `items` (oldest first) into routes, newest page first numbered 1.
///
/// Routes are returned in chunk order, so the oldest page comes first. Every
/// route's params are the caller's params with `page` set to the page number.
pub fn paginate_naturally<T, P>(
    items: &[T],
    options: PaginateOptions<P>,
) -> Result<Vec<PageRoute<T, P>>, PaginateError>
where
    T: Clone,
    P: Clone,
{
    let page_size = options.page_size.unwrap_or(PAGE_SIZE);
    let chunks = chunk_with_early_overflow(items, page_size)?;
    let total_pages = chunks.len();

    let routes: Vec<_> = chunks
        .into_iter()
        .enumerate()
        .map(|(index, chunk)| {
            let current_page = total_pages - index;

            let mut params = options.params.clone();
            params.insert("page".to_string(), current_page.to_string());

            let page = NaturalPage {
                data: chunk.to_vec(),
                current_page,
                last_page: 1,
                total_pages,
                start: 0,
                end: items.len() - 1,
                total: items.len(),
                size: page_size,
                next_page: (current_page < total_pages).then_some(current_page + 1),
                previous_page: (current_page > 1).then(|| current_page - 1),
            };

            PageRoute {
                params,
                props: PageProps {
                    extra: options.props.clone(),
                    page,
                },
            }
        })
        .collect();

    tracing::debug!(
        "Paginated {} items into {} pages of {}",
        items.len(),
        total_pages,
        page_size
    );

    Ok(routes)
}
