use shared_types::User;
use sqlx::{Pool, Postgres};
use std::sync::OnceLock;
use tantivy::collector::{Count, TopDocs};
use tantivy::query::QueryParser;
use tantivy::schema::Value;
use tantivy::schema::{Field, Schema, STORED, TEXT};
use tantivy::{doc, Index, IndexReader, IndexWriter, ReloadPolicy};
use uuid::Uuid;

use shared_types::AppError;

/// Global search index, initialized once during server startup.
static SEARCH_INDEX: OnceLock<UserSearchIndex> = OnceLock::new();

/// One page of search hits plus the total number of matches in the index.
#[derive(Debug, Default)]
pub struct SearchHits {
    pub users: Vec<User>,
    pub total: usize,
}

/// Schema field handles for the Tantivy index.
struct SearchFields {
    id: Field,
    name: Field,
    display_name: Field,
    fully_qualified_name: Field,
    email: Field,
}

/// In-memory Tantivy index over the user directory.
///
/// Every user field is stored so a hit can be rebuilt into a full `User`
/// without a database round trip.
pub struct UserSearchIndex {
    index: Index,
    reader: IndexReader,
    fields: SearchFields,
}

impl UserSearchIndex {
    /// Create a new in-RAM search index with the user schema.
    pub fn new() -> Self {
        let mut schema_builder = Schema::builder();
        let id = schema_builder.add_text_field("id", STORED);
        let name = schema_builder.add_text_field("name", TEXT | STORED);
        let display_name = schema_builder.add_text_field("display_name", TEXT | STORED);
        let fully_qualified_name =
            schema_builder.add_text_field("fully_qualified_name", TEXT | STORED);
        let email = schema_builder.add_text_field("email", TEXT | STORED);
        let schema = schema_builder.build();

        let index = Index::create_in_ram(schema);
        let reader = index
            .reader_builder()
            .reload_policy(ReloadPolicy::OnCommitWithDelay)
            .try_into()
            .expect("failed to create index reader");

        UserSearchIndex {
            index,
            reader,
            fields: SearchFields {
                id,
                name,
                display_name,
                fully_qualified_name,
                email,
            },
        }
    }

    /// Full-text search over the user directory. `page` starts at 1.
    ///
    /// Name fields match fuzzily with prefix semantics, so partially typed
    /// queries ("ali") already hit ("Alice"). A query the parser rejects is
    /// treated as matching nothing; index failures are surfaced.
    pub fn search(
        &self,
        query_str: &str,
        page: usize,
        page_size: usize,
    ) -> Result<SearchHits, AppError> {
        if query_str.trim().is_empty() {
            return Ok(SearchHits::default());
        }

        let searcher = self.reader.searcher();
        let mut query_parser = QueryParser::for_index(
            &self.index,
            vec![
                self.fields.name,
                self.fields.display_name,
                self.fields.fully_qualified_name,
                self.fields.email,
            ],
        );
        query_parser.set_field_fuzzy(self.fields.name, true, 1, true);
        query_parser.set_field_fuzzy(self.fields.display_name, true, 1, true);
        query_parser.set_field_fuzzy(self.fields.fully_qualified_name, true, 1, true);

        let query = match query_parser.parse_query(query_str) {
            Ok(q) => q,
            Err(_) => return Ok(SearchHits::default()),
        };

        let offset = page.saturating_sub(1) * page_size;
        let (total, top_docs) = searcher
            .search(
                &query,
                &(Count, TopDocs::with_limit(page_size).and_offset(offset)),
            )
            .map_err(|e| AppError::internal(e.to_string()))?;

        let mut users = Vec::with_capacity(top_docs.len());
        for (_score, doc_address) in top_docs {
            let doc: tantivy::TantivyDocument = match searcher.doc(doc_address) {
                Ok(d) => d,
                Err(_) => continue,
            };
            if let Some(user) = self.rebuild_user(&doc) {
                users.push(user);
            }
        }

        Ok(SearchHits { users, total })
    }

    /// Rebuild a `User` from a stored document. Skips docs with a bad id.
    fn rebuild_user(&self, doc: &tantivy::TantivyDocument) -> Option<User> {
        let stored = |field: Field| {
            doc.get_first(field)
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };

        let id = Uuid::parse_str(&stored(self.fields.id)).ok()?;
        let email = stored(self.fields.email);

        Some(User {
            id,
            name: stored(self.fields.name),
            display_name: stored(self.fields.display_name),
            fully_qualified_name: stored(self.fields.fully_qualified_name),
            email: if email.is_empty() { None } else { Some(email) },
        })
    }

    /// Index a batch of users, then commit and reload the reader so the
    /// batch is immediately searchable.
    pub fn index_users(&self, users: &[User]) {
        let mut writer = self.writer();
        let f = &self.fields;

        for user in users {
            writer
                .add_document(doc!(
                    f.id => user.id.to_string(),
                    f.name => user.name.as_str(),
                    f.display_name => user.display_name.as_str(),
                    f.fully_qualified_name => user.fully_qualified_name.as_str(),
                    f.email => user.email.as_deref().unwrap_or(""),
                ))
                .ok();
        }

        writer.commit().expect("failed to commit search index");
        self.reader.reload().ok();
    }

    /// Number of indexed users. Reported by the health endpoint.
    pub fn num_docs(&self) -> u64 {
        self.reader.searcher().num_docs()
    }

    /// Acquire an IndexWriter for bulk indexing. Caller must commit.
    fn writer(&self) -> IndexWriter {
        self.index
            .writer(50_000_000)
            .expect("failed to create index writer")
    }
}

impl Default for UserSearchIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the global UserSearchIndex. Panics if not yet initialized.
pub fn get_search() -> &'static UserSearchIndex {
    SEARCH_INDEX
        .get()
        .expect("UserSearchIndex not initialized; call init_search() first")
}

/// Initialize the global UserSearchIndex. Should be called once at startup.
pub fn init_search() -> &'static UserSearchIndex {
    SEARCH_INDEX.get_or_init(UserSearchIndex::new)
}

/// Build the search index from the users table.
/// Called once at server startup after migrations complete.
pub async fn build_index(pool: &Pool<Postgres>, search: &UserSearchIndex) {
    let users = match crate::repo::user::list_all(pool).await {
        Ok(users) => users,
        Err(e) => {
            tracing::warn!(error = %e, "failed to load users for search indexing");
            Vec::new()
        }
    };

    search.index_users(&users);
    tracing::info!(indexed = users.len(), "user search index built");
}
