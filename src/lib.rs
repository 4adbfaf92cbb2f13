pub mod configuration;

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod curve {
        pub mod curve;
        pub mod nonparametriccurve {
            pub mod nonparametriccurve;
            pub mod sampletext;
            pub mod piecewiselinearcurve;
        }
    }
}

pub mod model {
    pub mod domaincurve;
    pub mod domaincurvemanager;
    pub mod signal {
        pub mod errorprobability;
    }
    pub mod visual {
        pub mod visualangle;
    }
}

pub mod view {
    pub mod boundary;
    pub mod projection;
    pub mod camerapose;
    pub mod cameramanipulator;
    pub mod scenecamera;
    pub mod perspectivechanger;
    pub mod cameraperspectivechanger;
}
