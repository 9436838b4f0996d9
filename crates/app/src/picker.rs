//! Selection state for the add-members dialog.
//!
//! Every mutation of the dialog's data (query changes, fetched pages, fetch
//! failures, checkbox toggles) funnels through [`PickerState`], so the
//! component layer stays a thin shell around it. The state never performs
//! I/O itself: callers ask it for a [`FetchRequest`], execute the request,
//! and feed the outcome back in. Each request carries the generation that
//! was current when it was issued; outcomes from superseded generations are
//! dropped, which keeps a slow first page from clobbering the results of a
//! newer query.

use shared_types::{CursorPage, EntityReference, SearchPage, User, UserCard};
use shared_ui::ScrollMetrics;
use uuid::Uuid;

/// Rows requested per page, in both listing and search mode.
pub const PAGE_SIZE: usize = 25;

/// Search pages are numbered from 1.
pub const INITIAL_PAGE: usize = 1;

/// Fixed height of the scrollable user list, in pixels.
pub const CONTAINER_HEIGHT: f64 = 250.0;

/// Height of one user row, in pixels.
pub const ROW_HEIGHT: f64 = 50.0;

/// Which retrieval path to hit, with the parameters frozen at issue time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPlan {
    /// Cursor-paginated listing of the full directory (empty query).
    Listing { after: Option<String> },
    /// Search-index query for one page of hits.
    Search { query: String, page: usize },
}

/// A fetch the caller should execute, tagged with the generation that must
/// still be current for its outcome to be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: u64,
    pub plan: FetchPlan,
}

/// Accumulated dialog state. Created fresh each time the dialog opens and
/// discarded when it closes.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerState {
    query: String,
    users: Vec<User>,
    selected: Vec<Uuid>,
    /// Continuation token from the last listing page, `None` once exhausted.
    after: Option<String>,
    /// Next search page to request. Advances only after a page lands.
    page: usize,
    /// Total hit count reported by the most recent search response.
    total_hits: usize,
    generation: u64,
    in_flight: bool,
}

impl PickerState {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            users: Vec::new(),
            selected: Vec::new(),
            after: None,
            page: INITIAL_PAGE,
            total_hits: 0,
            generation: 0,
            in_flight: false,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_selected(&self, id: Uuid) -> bool {
        self.selected.contains(&id)
    }

    /// Install a new query and issue the first fetch for it. The accumulated
    /// list and paging progress reset before the request goes out; the
    /// selection survives.
    pub fn set_query(&mut self, query: String) -> FetchRequest {
        self.query = query;
        self.users.clear();
        self.after = None;
        self.page = INITIAL_PAGE;
        self.total_hits = 0;
        self.issue()
    }

    /// Issue the next page for the current mode if one is wanted and no
    /// request is already outstanding.
    pub fn request_more(&mut self) -> Option<FetchRequest> {
        if self.in_flight || !self.wants_more() {
            return None;
        }
        Some(self.issue())
    }

    fn issue(&mut self) -> FetchRequest {
        self.generation += 1;
        self.in_flight = true;
        let plan = if self.query.is_empty() {
            FetchPlan::Listing {
                after: self.after.clone(),
            }
        } else {
            FetchPlan::Search {
                query: self.query.clone(),
                page: self.page,
            }
        };
        FetchRequest {
            generation: self.generation,
            plan,
        }
    }

    /// Whether scrolling to the bottom should request another page.
    ///
    /// In listing mode more rows exist while the server keeps returning a
    /// continuation token. In search mode `page` names the next page to
    /// request, so the pages already fetched cover `(page - 1) * PAGE_SIZE`
    /// hits; more exist while that lags the reported total.
    pub fn wants_more(&self) -> bool {
        if self.query.is_empty() {
            self.after.is_some()
        } else {
            (self.page - 1) * PAGE_SIZE < self.total_hits
        }
    }

    /// Append a listing page. Returns `false` (and changes nothing) if the
    /// response belongs to a superseded request.
    pub fn apply_listing(&mut self, generation: u64, page: CursorPage<User>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.in_flight = false;
        self.users.extend(page.data);
        self.after = page.paging.after;
        true
    }

    /// Append a search page and record the reported total. The page counter
    /// advances only here, after the page has actually landed.
    pub fn apply_search(&mut self, generation: u64, hits: SearchPage<User>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.in_flight = false;
        self.users.extend(hits.data);
        self.total_hits = hits.total;
        self.page += 1;
        true
    }

    /// Record a failed fetch: the accumulated list is discarded but paging
    /// progress is kept, so scrolling (or re-typing) can retry the same
    /// page. Stale failures are ignored and leave the state untouched.
    pub fn fail_fetch(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.in_flight = false;
        self.users.clear();
        true
    }

    /// Toggle one user in the ordered selection: the first occurrence is
    /// removed if present, otherwise the id is appended.
    pub fn toggle(&mut self, id: Uuid) {
        if let Some(pos) = self.selected.iter().position(|s| *s == id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(id);
        }
    }

    /// Entity references for the current selection, in selection order.
    /// Nothing checks the ids against the currently visible rows.
    pub fn confirm(&self) -> Vec<EntityReference> {
        self.selected.iter().copied().map(EntityReference::user).collect()
    }

    /// Cards for every fetched user who is not already a member.
    pub fn visible_cards(&self, existing_members: &[Uuid]) -> Vec<UserCard> {
        self.users
            .iter()
            .filter(|u| !existing_members.contains(&u.id))
            .map(User::to_card)
            .collect()
    }
}

impl Default for PickerState {
    fn default() -> Self {
        Self::new()
    }
}

/// True at the one scroll position that triggers a fetch: the bottom edge of
/// the content sits exactly one container height below the scroll offset,
/// which the browser reports when the list is scrolled fully to the bottom.
/// The comparison is exact on purpose.
#[allow(clippy::float_cmp)]
pub fn at_load_threshold(metrics: &ScrollMetrics) -> bool {
    metrics.content_height - metrics.scroll_top == CONTAINER_HEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::Paging;

    fn user(name: &str) -> User {
        User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            display_name: name.to_string(),
            fully_qualified_name: format!("eng/{name}"),
            email: Some(format!("{name}@acme.dev")),
        }
    }

    fn batch(prefix: &str, count: usize) -> Vec<User> {
        (0..count).map(|i| user(&format!("{prefix}{i:02}"))).collect()
    }

    fn listing_page(users: Vec<User>, after: Option<&str>) -> CursorPage<User> {
        CursorPage {
            data: users,
            paging: Paging {
                after: after.map(str::to_string),
            },
        }
    }

    #[test]
    fn listing_pages_accumulate_in_arrival_order() {
        let mut state = PickerState::new();
        let a = user("ada");
        let b = user("ben");
        let c = user("chloe");

        let first = state.set_query(String::new());
        assert_eq!(first.plan, FetchPlan::Listing { after: None });
        assert!(state.apply_listing(
            first.generation,
            listing_page(vec![a.clone(), b.clone()], Some("tok-1")),
        ));

        let second = state.request_more().unwrap();
        assert_eq!(
            second.plan,
            FetchPlan::Listing {
                after: Some("tok-1".to_string())
            }
        );
        assert!(state.apply_listing(second.generation, listing_page(vec![c.clone()], None)));

        let ids: Vec<Uuid> = state.visible_cards(&[]).iter().map(|card| card.id).collect();
        assert_eq!(ids, vec![a.id, b.id, c.id]);
        assert!(!state.wants_more());
        assert_eq!(state.request_more(), None);
    }

    #[test]
    fn listing_without_continuation_token_stops_paging() {
        let mut state = PickerState::new();
        let req = state.set_query(String::new());
        state.apply_listing(req.generation, listing_page(batch("u", 5), None));
        assert!(!state.wants_more());
        assert_eq!(state.request_more(), None);
    }

    #[test]
    fn toggling_twice_restores_the_selection() {
        let mut state = PickerState::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        state.toggle(a);
        state.toggle(b);

        let before = state.clone();
        let extra = Uuid::new_v4();
        state.toggle(extra);
        state.toggle(extra);
        assert_eq!(state, before);
    }

    #[test]
    fn existing_members_are_hidden_from_the_list() {
        let mut state = PickerState::new();
        let u1 = user("hana");
        let u2 = user("hugo");
        let req = state.set_query(String::new());
        state.apply_listing(req.generation, listing_page(vec![u1.clone(), u2.clone()], None));

        let visible = state.visible_cards(&[u1.id]);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, u2.id);
        assert_eq!(visible[0].entity_type, "user");
    }

    #[test]
    fn new_query_clears_previous_results_before_fetching() {
        let mut state = PickerState::new();
        let first = state.set_query(String::new());
        state.apply_listing(first.generation, listing_page(batch("u", 3), Some("tok")));

        let second = state.set_query("ada".to_string());
        assert_eq!(
            second.plan,
            FetchPlan::Search {
                query: "ada".to_string(),
                page: INITIAL_PAGE
            }
        );
        assert!(state.visible_cards(&[]).is_empty());

        let hit = user("ada");
        assert!(state.apply_search(
            second.generation,
            SearchPage {
                data: vec![hit.clone()],
                total: 1
            },
        ));
        let ids: Vec<Uuid> = state.visible_cards(&[]).iter().map(|card| card.id).collect();
        assert_eq!(ids, vec![hit.id]);
    }

    #[test]
    fn confirm_emits_user_refs_in_selection_order() {
        let mut state = PickerState::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();
        state.toggle(a);
        state.toggle(b);
        state.toggle(c);
        state.toggle(b);

        let refs = state.confirm();
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0], EntityReference::user(a));
        assert_eq!(refs[1], EntityReference::user(c));
        assert!(refs.iter().all(|r| r.entity_type == "user"));
    }

    #[test]
    fn selection_survives_query_changes() {
        let mut state = PickerState::new();
        let kept = Uuid::new_v4();
        state.toggle(kept);

        state.set_query("someone else".to_string());
        assert!(state.is_selected(kept));
        assert_eq!(state.confirm(), vec![EntityReference::user(kept)]);
    }

    #[test]
    fn scroll_threshold_requires_exact_remaining_distance() {
        let at = |scroll_top: f64, content_height: f64| {
            at_load_threshold(&ScrollMetrics {
                scroll_top,
                content_height,
                viewport_height: CONTAINER_HEIGHT,
            })
        };

        assert!(at(550.0, 800.0));
        assert!(at(0.0, 250.0));
        assert!(!at(549.0, 800.0));
        assert!(!at(551.0, 800.0));
        assert!(!at(0.0, 200.0));
    }

    #[test]
    fn stale_listing_response_is_dropped() {
        let mut state = PickerState::new();
        let first = state.set_query(String::new());
        let second = state.set_query("dmitri".to_string());

        assert!(!state.apply_listing(first.generation, listing_page(batch("u", 2), None)));
        assert!(state.visible_cards(&[]).is_empty());
        assert!(state.is_loading());

        let hit = user("dmitri");
        assert!(state.apply_search(
            second.generation,
            SearchPage {
                data: vec![hit.clone()],
                total: 1
            },
        ));
        let ids: Vec<Uuid> = state.visible_cards(&[]).iter().map(|card| card.id).collect();
        assert_eq!(ids, vec![hit.id]);
    }

    #[test]
    fn stale_failure_leaves_fresh_results_alone() {
        let mut state = PickerState::new();
        let first = state.set_query(String::new());
        state.apply_listing(first.generation, listing_page(batch("u", 2), Some("tok")));
        let doomed = state.request_more().unwrap();

        let replacement = state.set_query("rosa".to_string());
        assert!(!state.fail_fetch(doomed.generation));
        assert!(state.is_loading());

        let hit = user("rosa");
        state.apply_search(
            replacement.generation,
            SearchPage {
                data: vec![hit.clone()],
                total: 1,
            },
        );
        let ids: Vec<Uuid> = state.visible_cards(&[]).iter().map(|card| card.id).collect();
        assert_eq!(ids, vec![hit.id]);
    }

    #[test]
    fn failure_clears_results_but_keeps_the_retry_path() {
        let mut state = PickerState::new();
        let first = state.set_query(String::new());
        state.apply_listing(first.generation, listing_page(batch("u", 25), Some("tok")));

        let doomed = state.request_more().unwrap();
        assert!(state.fail_fetch(doomed.generation));
        assert!(state.visible_cards(&[]).is_empty());
        assert!(!state.is_loading());

        // The continuation token is still there, so scrolling retries it.
        let retry = state.request_more().unwrap();
        assert_eq!(
            retry.plan,
            FetchPlan::Listing {
                after: Some("tok".to_string())
            }
        );
    }

    #[test]
    fn scroll_fetch_is_suppressed_while_one_is_outstanding() {
        let mut state = PickerState::new();
        let first = state.set_query(String::new());
        state.apply_listing(first.generation, listing_page(batch("u", 25), Some("tok")));

        assert!(state.request_more().is_some());
        assert_eq!(state.request_more(), None);
    }

    #[test]
    fn search_pagination_stops_at_reported_total() {
        let mut state = PickerState::new();
        let first = state.set_query("eng".to_string());
        assert_eq!(
            first.plan,
            FetchPlan::Search {
                query: "eng".to_string(),
                page: 1
            }
        );
        state.apply_search(
            first.generation,
            SearchPage {
                data: batch("hit", PAGE_SIZE),
                total: 40,
            },
        );
        assert!(state.wants_more());

        let second = state.request_more().unwrap();
        assert_eq!(
            second.plan,
            FetchPlan::Search {
                query: "eng".to_string(),
                page: 2
            }
        );
        state.apply_search(
            second.generation,
            SearchPage {
                data: batch("hit", 15),
                total: 40,
            },
        );

        assert_eq!(state.visible_cards(&[]).len(), 40);
        assert!(!state.wants_more());
        assert_eq!(state.request_more(), None);
    }
}
