// 呼び出し方式間の計算結果の一致に関する統合テスト
use crate::fixtures::{assert_bits_eq, expected_prefix, CountingAddOperation, MockBinaryOp};
use dispatch_bench::{
    verify_equivalence, BinaryOpFixture, DispatchStrategy, InlineAddOperation, REFERENCE_LOOPS,
};

#[test]
fn test_cross_strategy_equivalence_for_reference_loops() {
    for loops in REFERENCE_LOOPS {
        let mut fixture = BinaryOpFixture::new();
        fixture.set_loops(loops).unwrap();

        let mut outputs = Vec::new();
        for strategy in DispatchStrategy::ALL {
            // 別インスタンスで実行し、前の方式の結果が残らないようにする
            let mut isolated = BinaryOpFixture::new();
            isolated.set_loops(loops).unwrap();
            isolated.run(strategy);
            outputs.push(isolated.output().to_vec());
        }

        let expected = expected_prefix(&fixture);
        for output in &outputs {
            assert_bits_eq(&output[..loops], &expected);
            assert_bits_eq(output, &outputs[0]);
        }
    }
}

#[test]
fn test_reference_output_for_five_loops() {
    let mut fixture = BinaryOpFixture::new();
    fixture.set_loops(5).unwrap();
    fixture.run_via_static_dispatch();

    let reference = [10.0, 9.9, 9.8, 9.7, 9.6];
    for (actual, expected) in fixture.active_output().iter().zip(reference) {
        assert!((actual - expected).abs() < 1e-12);
    }
    assert!(fixture.output()[5..].iter().all(|&v| v == 0.0));
}

#[test]
fn test_loops_increase_preserves_prefix() {
    let mut fixture = BinaryOpFixture::new();
    fixture.set_loops(5).unwrap();
    fixture.run_via_closure();
    let prefix = fixture.active_output().to_vec();

    fixture.set_loops(500).unwrap();
    fixture.run_via_closure();

    assert_bits_eq(&fixture.output()[..5], &prefix);
    assert_bits_eq(fixture.output(), &expected_prefix(&fixture));
}

#[test]
fn test_repeated_runs_are_idempotent() {
    let mut fixture = BinaryOpFixture::new();
    fixture.set_loops(500).unwrap();

    for strategy in DispatchStrategy::ALL {
        fixture.run(strategy);
        let first = fixture.output().to_vec();
        for _ in 0..3 {
            fixture.run(strategy);
        }
        assert_bits_eq(fixture.output(), &first);
    }
}

#[test]
fn test_zero_loops_is_a_no_op() {
    let mut fixture = BinaryOpFixture::new();
    fixture.set_loops(0).unwrap();

    for strategy in DispatchStrategy::ALL {
        fixture.run(strategy);
    }

    assert!(fixture.active_output().is_empty());
    assert!(fixture.output().iter().all(|&v| v == 0.0));
}

#[test]
fn test_dynamic_path_invokes_op_per_element() {
    let mut fixture = BinaryOpFixture::new();
    fixture.set_loops(500).unwrap();

    let op = CountingAddOperation::new();
    fixture.perform_dynamic(&op);

    assert_eq!(op.calls(), 500);
    assert_bits_eq(fixture.output(), &expected_prefix(&fixture));
}

#[test]
fn test_dynamic_path_accepts_mock() {
    let mut fixture = BinaryOpFixture::with_length(8);
    fixture.set_loops(8).unwrap();

    let mut mock = MockBinaryOp::new();
    mock.expect_perform().times(8).returning(|_, _| 1.0);
    fixture.perform_dynamic(&mock);

    assert!(fixture.output().iter().all(|&v| v == 1.0));
}

#[test]
fn test_static_path_with_explicit_type() {
    let mut fixture = BinaryOpFixture::new();
    fixture.set_loops(500).unwrap();

    fixture.perform_static::<InlineAddOperation>();

    assert_bits_eq(fixture.output(), &expected_prefix(&fixture));
}

#[test]
fn test_verify_equivalence_after_stale_output() {
    let mut fixture = BinaryOpFixture::new();
    fixture.set_loops(500).unwrap();
    fixture.perform_with_closure(|lhs, rhs| lhs * rhs);

    fixture.set_loops(5).unwrap();
    let report = verify_equivalence(&mut fixture).unwrap();

    assert_eq!(report.loops, 5);
    assert_eq!(report.strategies, DispatchStrategy::ALL.to_vec());
    // 検証は計算対象範囲外に触れない
    assert_eq!(
        fixture.output()[5],
        fixture.lhs()[5] * fixture.rhs()[5]
    );
}
