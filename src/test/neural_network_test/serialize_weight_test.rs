use super::*;

#[test]
fn test_serializable_dense_weight_from_layer() {
    let dense = Dense::from_weights(array![[1.0, 2.0, 3.0]], array![0.5]).unwrap();
    let serializable = SerializableLayerWeight::from_layer_weight(&dense.get_weights());

    match &serializable {
        SerializableLayerWeight::Dense(w) => {
            assert_eq!(w.weight, vec![vec![1.0, 2.0, 3.0]]);
            assert_eq!(w.bias, vec![0.5]);
        }
        SerializableLayerWeight::Empty => panic!("expected dense weights"),
    }

    let json = serde_json::to_string(&serializable).unwrap();
    assert!(json.contains("\"type\":\"Dense\""));
}

#[test]
fn test_serializable_empty_weight_tag() {
    let layer = ActivationLayer::relu();
    let serializable = SerializableLayerWeight::from_layer_weight(&layer.get_weights());
    assert_eq!(serializable, SerializableLayerWeight::Empty);
    assert_eq!(serde_json::to_string(&serializable).unwrap(), "{\"type\":\"Empty\"}");
}

#[test]
fn test_serializable_dense_weight_rejects_ragged_rows() {
    let ragged = SerializableDenseWeight {
        weight: vec![vec![1.0, 2.0], vec![3.0]],
        bias: vec![0.0, 0.0],
    };
    assert!(matches!(ragged.to_arrays(), Err(IoError::StdIoError(_))));
}

#[test]
fn test_apply_weights_checks_shape_and_kind() {
    let mut dense = Dense::from_weights(array![[1.0, 2.0]], array![0.0]).unwrap();

    let wrong_shape = SerializableLayerWeight::Dense(SerializableDenseWeight {
        weight: vec![vec![1.0, 2.0, 3.0]],
        bias: vec![0.0],
    });
    assert!(dense.apply_weights(&wrong_shape).is_err());
    assert!(dense.apply_weights(&SerializableLayerWeight::Empty).is_err());

    let replacement = SerializableLayerWeight::Dense(SerializableDenseWeight {
        weight: vec![vec![-1.0, 4.0]],
        bias: vec![2.5],
    });
    dense.apply_weights(&replacement).unwrap();
    assert_eq!(dense.weights(), &array![[-1.0, 4.0]]);
    assert_eq!(dense.bias(), &array![2.5]);

    let mut activation = ActivationLayer::sigmoid();
    assert!(activation.apply_weights(&SerializableLayerWeight::Empty).is_ok());
    assert!(activation.apply_weights(&replacement).is_err());
}
