use super::CategoryAggregate;
use crate::assessment::catalog::QuestionCatalog;
use crate::assessment::domain::QuestionResponse;

/// Groups responses by catalog category and dimension, applying reverse
/// scoring (`8 - raw`) where the matching question is flagged.
///
/// Responses whose id matches no catalog question are dropped silently.
/// Output order is the first-appearance order of categories in the catalog,
/// independent of response submission order.
pub(crate) fn aggregate_responses(
    catalog: &QuestionCatalog,
    responses: &[QuestionResponse],
) -> Vec<CategoryAggregate> {
    let mut aggregates: Vec<CategoryAggregate> = Vec::new();

    for question in catalog.questions() {
        if !aggregates.iter().any(|a| a.category == question.category) {
            aggregates.push(CategoryAggregate::new(question.category));
        }
    }

    for aggregate in &mut aggregates {
        for question in catalog.questions() {
            if question.category == aggregate.category {
                aggregate
                    .dimensions
                    .entry(question.dimension.to_string())
                    .or_default();
            }
        }
    }

    for response in responses {
        let question = match catalog.find(&response.question_id) {
            Some(question) => question,
            None => continue,
        };

        let adjusted = if question.reverse_scored {
            8u8.saturating_sub(response.score)
        } else {
            response.score
        };

        if let Some(aggregate) = aggregates
            .iter_mut()
            .find(|a| a.category == question.category)
        {
            aggregate.scores.push(adjusted);
            aggregate
                .dimensions
                .entry(question.dimension.to_string())
                .or_default()
                .push(adjusted);
        }
    }

    aggregates
}
