mod crop_job_tests;
