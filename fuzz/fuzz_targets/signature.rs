#![no_main]

use hookscope::MethodSignature;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let signature = MethodSignature::new(data.to_vec());
    let _ = signature.number_of_type_arguments();
    let _ = signature.number_of_arguments();
    let _ = signature.return_type_is_object();
    let _ = signature.index_of_return_type();
    let _ = signature.is_instance_method();
});
