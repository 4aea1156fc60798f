use serde::Serialize;

use proxsearch_common::postings_list::PostingsList;
use proxsearch_common::Result;

#[derive(Serialize)]
struct PostingOutput<'a> {
    doc_id: u32,
    tf: u32,
    positions: &'a [u32],
}

#[derive(Serialize)]
struct PostingsListOutput<'a> {
    field: &'a str,
    doc_freq: usize,
    ctf: u64,
    postings: Vec<PostingOutput<'a>>,
}

pub fn to_json(pl: &PostingsList, pretty_print: bool) -> Result<String> {
    let output = PostingsListOutput {
        field: pl.field(),
        doc_freq: pl.doc_freq(),
        ctf: pl.ctf(),
        postings: pl
            .iter()
            .map(|td| PostingOutput { doc_id: td.doc_id, tf: td.tf(), positions: &td.positions })
            .collect(),
    };

    Ok(if pretty_print {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    })
}


#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use proxsearch_common::postings_list::PostingsList;

    use super::to_json;

    #[test]
    fn test_to_json() {
        let pl = PostingsList::from_postings("body", vec![(2, vec![3, 8]), (5, vec![1])]).unwrap();

        assert_eq!(
            to_json(&pl, false).unwrap(),
            r#"{"field":"body","doc_freq":2,"ctf":3,"postings":[{"doc_id":2,"tf":2,"positions":[3,8]},{"doc_id":5,"tf":1,"positions":[1]}]}"#,
        );

        let pretty = to_json(&PostingsList::new("title"), true).unwrap();
        assert!(pretty.contains('\n'));
        assert_eq!(serde_json::from_str::<serde_json::Value>(&pretty).unwrap()["postings"], serde_json::json!([]));
    }
}
