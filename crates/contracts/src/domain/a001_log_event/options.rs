//! Dropdown option lists and their loader.

use std::cell::Cell;
use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use async_trait::async_trait;

use super::dimension::SingleDimension;

/// Remote column enumeration: distinct values of one log event column.
#[async_trait(?Send)]
pub trait ColumnSource {
    async fn get_column(&self, token: Option<&str>, column: &str) -> Result<Vec<String>, String>;
}

/// Valid values per dropdown. A dimension without a loaded list has no valid values
/// besides the wildcard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionLists {
    lists: BTreeMap<SingleDimension, Vec<String>>,
}

impl OptionLists {
    pub fn get(&self, dimension: SingleDimension) -> &[String] {
        self.lists
            .get(&dimension)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Replace the whole list at once
    pub fn set(&mut self, dimension: SingleDimension, values: Vec<String>) {
        self.lists.insert(dimension, values);
    }

    pub fn contains(&self, dimension: SingleDimension, value: &str) -> bool {
        self.get(dimension).iter().any(|v| v == value)
    }
}

/// Fetch one dimension's options, falling back to the static table on failure.
pub async fn load_column<S>(source: &S, token: Option<&str>, dimension: SingleDimension) -> Vec<String>
where
    S: ColumnSource + ?Sized,
{
    match source.get_column(token, dimension.column()).await {
        Ok(values) => values,
        Err(e) => {
            log::error!(
                "Querying for {} ran into an error: {}. Using fallback values for dropdown",
                dimension.column(),
                e
            );
            dimension
                .fallback_options()
                .iter()
                .map(|s| s.to_string())
                .collect()
        }
    }
}

/// Generation counter guarding against late deliveries.
///
/// A new load round or a teardown advances the epoch; tickets taken earlier
/// stop being current and their results are dropped.
#[derive(Clone, Debug, Default)]
pub struct LoadEpoch {
    current: Rc<Cell<u64>>,
}

impl LoadEpoch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new round, superseding every outstanding ticket
    pub fn begin(&self) -> LoadTicket {
        self.invalidate();
        LoadTicket {
            current: Rc::clone(&self.current),
            id: self.current.get(),
        }
    }

    pub fn invalidate(&self) {
        self.current.set(self.current.get().wrapping_add(1));
    }
}

#[derive(Clone, Debug)]
pub struct LoadTicket {
    current: Rc<Cell<u64>>,
    id: u64,
}

impl LoadTicket {
    pub fn is_current(&self) -> bool {
        self.current.get() == self.id
    }
}

/// Boxed local future, spawned by the caller's executor
pub type LoadTask = Pin<Box<dyn Future<Output = ()>>>;

/// Loads every dropdown's options from a [`ColumnSource`].
pub struct OptionLoader<S: ?Sized> {
    source: Rc<S>,
    epoch: LoadEpoch,
}

impl<S> OptionLoader<S>
where
    S: ColumnSource + ?Sized + 'static,
{
    pub fn new(source: Rc<S>) -> Self {
        Self {
            source,
            epoch: LoadEpoch::new(),
        }
    }

    /// One independent task per dimension.
    ///
    /// Each task hands its finished list to `deliver`, in whatever order the
    /// fetches complete. Tasks from an earlier `start` or from before
    /// [`cancel`](Self::cancel) deliver nothing.
    pub fn start<F>(&self, token: Option<String>, deliver: F) -> Vec<LoadTask>
    where
        F: Fn(SingleDimension, Vec<String>) + Clone + 'static,
    {
        let ticket = self.epoch.begin();

        SingleDimension::all()
            .into_iter()
            .map(|dimension| {
                let source = Rc::clone(&self.source);
                let token = token.clone();
                let ticket = ticket.clone();
                let deliver = deliver.clone();

                Box::pin(async move {
                    let values = load_column(source.as_ref(), token.as_deref(), dimension).await;
                    if ticket.is_current() {
                        deliver(dimension, values);
                    } else {
                        log::debug!("Discarding stale {} options", dimension.column());
                    }
                }) as LoadTask
            })
            .collect()
    }

    /// Drop the results of every task still in flight
    pub fn cancel(&self) {
        self.epoch.invalidate();
    }
}

impl<S: ?Sized> Drop for OptionLoader<S> {
    // Tasks outlive the loader; their results must not land after teardown
    fn drop(&mut self) {
        self.epoch.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeColumns {
        columns: HashMap<&'static str, Vec<String>>,
        seen_tokens: RefCell<Vec<Option<String>>>,
    }

    #[async_trait(?Send)]
    impl ColumnSource for FakeColumns {
        async fn get_column(&self, token: Option<&str>, column: &str) -> Result<Vec<String>, String> {
            self.seen_tokens.borrow_mut().push(token.map(str::to_string));
            self.columns
                .get(column)
                .cloned()
                .ok_or_else(|| format!("HTTP error: 500 for {}", column))
        }
    }

    fn source() -> Rc<FakeColumns> {
        let mut columns = HashMap::new();
        for dim in SingleDimension::all() {
            columns.insert(dim.column(), vec![format!("{}-1", dim.column())]);
        }
        Rc::new(FakeColumns {
            columns,
            ..Default::default()
        })
    }

    fn collector() -> (
        Rc<RefCell<OptionLists>>,
        impl Fn(SingleDimension, Vec<String>) + Clone + 'static,
    ) {
        let lists = Rc::new(RefCell::new(OptionLists::default()));
        let sink = Rc::clone(&lists);
        (lists, move |dim: SingleDimension, values: Vec<String>| {
            sink.borrow_mut().set(dim, values)
        })
    }

    #[test]
    fn test_loads_every_dimension_with_token() {
        let source = source();
        let loader = OptionLoader::new(Rc::clone(&source));
        let (lists, deliver) = collector();

        for task in loader.start(Some("tok-1".into()), deliver) {
            block_on(task);
        }

        for dim in SingleDimension::all() {
            assert_eq!(lists.borrow().get(dim), &[format!("{}-1", dim.column())]);
        }
        let tokens = source.seen_tokens.borrow();
        assert_eq!(tokens.len(), 5);
        assert!(tokens.iter().all(|t| t.as_deref() == Some("tok-1")));
    }

    #[test]
    fn test_completion_order_does_not_matter() {
        let loader = OptionLoader::new(source());
        let (lists, deliver) = collector();

        let mut tasks = loader.start(None, deliver);
        tasks.reverse();
        for task in tasks {
            block_on(task);
        }
        assert!(lists.borrow().contains(SingleDimension::EaiDomain, "eai_domain-1"));
        assert!(lists.borrow().contains(SingleDimension::EventContext, "event_context-1"));
    }

    #[test]
    fn test_failed_column_uses_fallback() {
        let mut fake = FakeColumns::default();
        for dim in SingleDimension::all() {
            if dim != SingleDimension::Application {
                fake.columns.insert(dim.column(), vec!["remote".into()]);
            }
        }
        let loader = OptionLoader::new(Rc::new(fake));
        let (lists, deliver) = collector();

        for task in loader.start(Some("tok".into()), deliver) {
            block_on(task);
        }

        let expected: Vec<String> = SingleDimension::Application
            .fallback_options()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(lists.borrow().get(SingleDimension::Application), expected.as_slice());
        assert_eq!(lists.borrow().get(SingleDimension::EaiDomain), &["remote".to_string()]);
    }

    #[test]
    fn test_restart_discards_previous_round() {
        let loader = OptionLoader::new(source());
        let (lists, deliver) = collector();

        let stale = loader.start(None, deliver.clone());
        let fresh = loader.start(Some("new".into()), deliver);

        for task in stale {
            block_on(task);
        }
        assert_eq!(*lists.borrow(), OptionLists::default());

        for task in fresh {
            block_on(task);
        }
        assert!(lists.borrow().contains(SingleDimension::Application, "application-1"));
    }

    #[test]
    fn test_cancel_drops_in_flight_results() {
        let loader = OptionLoader::new(source());
        let (lists, deliver) = collector();

        let tasks = loader.start(None, deliver);
        loader.cancel();
        for task in tasks {
            block_on(task);
        }
        assert_eq!(*lists.borrow(), OptionLists::default());
    }

    #[test]
    fn test_dropping_loader_drops_in_flight_results() {
        let loader = OptionLoader::new(source());
        let (lists, deliver) = collector();

        let tasks = loader.start(Some("tok".into()), deliver);
        drop(loader);
        for task in tasks {
            block_on(task);
        }
        assert_eq!(*lists.borrow(), OptionLists::default());
    }

    #[test]
    fn test_unloaded_dimension_has_no_options() {
        let lists = OptionLists::default();
        assert!(lists.get(SingleDimension::BusinessDomain).is_empty());
        assert!(!lists.contains(SingleDimension::BusinessDomain, "Finance"));
    }
}
