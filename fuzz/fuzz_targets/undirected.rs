#![no_main]

use libfuzzer_sys::fuzz_target;

use pathgraph::{
    infra::{
        arbitrary::{MutOpResult, MutOpsSeq},
        testing::{check_consistency, check_path},
    },
    UndirectedGraph,
};

fuzz_target!(|ops: MutOpsSeq<u8>| {
    let mut graph = UndirectedGraph::new();

    for op in ops {
        if let MutOpResult::GetPath {
            from,
            to,
            result: Ok(Some(path)),
        } = op.apply(&mut graph)
        {
            check_path(&graph, &from, &to, &path)
                .as_ref()
                .map_err(ToString::to_string)
                .unwrap();
        }

        check_consistency(&graph)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }
});
