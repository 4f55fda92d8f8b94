use crate::errors::LoadError;
use crate::models::{ChartPoint, Olympic};
use crate::stats::build_chart_data;
use crate::storage::DataSource;
use std::{pin::Pin, sync::Arc};
use tokio::sync::watch;
use tokio_stream::{Stream, StreamExt, wrappers::WatchStream};
use tracing::{error, info};

pub type Olympics = Arc<Vec<Olympic>>;

pub type Subscription<T> = Pin<Box<dyn Stream<Item = T> + Send + 'static>>;

#[derive(Clone)]
pub struct OlympicStore {
    olympics: Arc<watch::Sender<Option<Olympics>>>,
}

impl OlympicStore {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self {
            olympics: Arc::new(sender),
        }
    }

    /// On failure an empty collection is still published so subscribers never stall.
    pub async fn load_initial_data<S: DataSource>(&self, source: &S) -> Result<Olympics, LoadError> {
        match source.fetch().await {
            Ok(olympics) => {
                let olympics = Arc::new(olympics);
                info!(countries = olympics.len(), "olympic data loaded");
                self.olympics.send_replace(Some(Arc::clone(&olympics)));
                Ok(olympics)
            }
            Err(err) => {
                error!("failed to load olympic data: {err}");
                self.olympics.send_replace(Some(Arc::new(Vec::new())));
                Err(err)
            }
        }
    }

    pub fn olympics(&self) -> Subscription<Olympics> {
        Box::pin(WatchStream::new(self.olympics.subscribe()).filter_map(|olympics| olympics))
    }

    pub fn chart_data(&self) -> Subscription<Vec<ChartPoint>> {
        Box::pin(self.olympics().map(|olympics| build_chart_data(&olympics)))
    }

    pub fn snapshot(&self) -> Option<Olympics> {
        self.olympics.borrow().clone()
    }

    #[cfg(test)]
    pub(crate) fn subscriber_count(&self) -> usize {
        self.olympics.receiver_count()
    }
}

impl Default for OlympicStore {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{FailingSource, StaticSource};
    use super::*;
    use crate::stats::fixtures::olympic;
    use std::time::Duration;
    use tokio::time::timeout;

    fn sample() -> Vec<Olympic> {
        vec![
            olympic(1, "Italy", &[(2012, 5), (2016, 3)]),
            olympic(2, "Spain", &[(2012, 10)]),
        ]
    }

    #[tokio::test]
    async fn unresolved_store_emits_nothing() {
        let store = OlympicStore::new();
        let mut olympics = store.olympics();
        let next = timeout(Duration::from_millis(50), olympics.next()).await;
        assert!(next.is_err());
        assert!(store.snapshot().is_none());
    }

    #[tokio::test]
    async fn late_subscribers_receive_latest_value() {
        let store = OlympicStore::new();
        store.load_initial_data(&StaticSource(sample())).await.unwrap();

        let mut first = store.olympics();
        let mut second = store.olympics();
        assert_eq!(first.next().await.unwrap().len(), 2);
        assert_eq!(second.next().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn waiting_subscriber_unblocks_on_load() {
        let store = OlympicStore::new();
        let mut olympics = store.olympics();

        let loader = store.clone();
        tokio::spawn(async move {
            let _ = loader.load_initial_data(&StaticSource(sample())).await;
        });

        let value = timeout(Duration::from_secs(1), olympics.next()).await.unwrap();
        assert_eq!(value.unwrap()[0].country, "Italy");
    }

    #[tokio::test]
    async fn chart_data_sums_medals_in_source_order() {
        let store = OlympicStore::new();
        store.load_initial_data(&StaticSource(sample())).await.unwrap();

        let points = store.chart_data().next().await.unwrap();
        let values: Vec<_> = points.iter().map(|point| point.value).collect();
        assert_eq!(values, vec![8, 10]);
    }

    #[tokio::test]
    async fn load_failure_publishes_empty_collection() {
        let store = OlympicStore::new();
        let mut olympics = store.olympics();

        let result = store.load_initial_data(&FailingSource).await;
        assert!(result.is_err());

        let value = timeout(Duration::from_secs(1), olympics.next()).await.unwrap();
        assert!(value.unwrap().is_empty());
        assert!(store.chart_data().next().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn second_load_overwrites_first() {
        let store = OlympicStore::new();
        store.load_initial_data(&StaticSource(sample())).await.unwrap();
        store
            .load_initial_data(&StaticSource(vec![olympic(9, "France", &[])]))
            .await
            .unwrap();

        let snapshot = store.snapshot().unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].country, "France");
    }

    #[tokio::test]
    async fn dropping_a_stream_releases_the_subscription() {
        let store = OlympicStore::new();
        let stream = store.chart_data();
        assert_eq!(store.subscriber_count(), 1);
        drop(stream);
        assert_eq!(store.subscriber_count(), 0);
    }
}
